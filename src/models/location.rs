// src/models/location.rs

/// Locations a new review may be tagged with. Closed list; matching is exact.
pub const VALID_LOCATIONS: [&str; 18] = [
    "Albuquerque, New Mexico",
    "Carlsbad, California",
    "Chula Vista, California",
    "Colorado Springs, Colorado",
    "Denver, Colorado",
    "El Cajon, California",
    "El Paso, Texas",
    "Escondido, California",
    "Fresno, California",
    "La Mesa, California",
    "Las Vegas, Nevada",
    "Los Angeles, California",
    "Oceanside, California",
    "Phoenix, Arizona",
    "Sacramento, California",
    "Salt Lake City, Utah",
    "San Diego, California",
    "Tucson, Arizona",
];

pub fn is_valid_location(location: &str) -> bool {
    VALID_LOCATIONS.contains(&location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_locations_are_valid() {
        assert!(is_valid_location("Denver, Colorado"));
        assert!(is_valid_location("Tucson, Arizona"));
    }

    #[test]
    fn test_matching_is_exact() {
        assert!(!is_valid_location("Nowhere"));
        assert!(!is_valid_location("denver, colorado"));
        assert!(!is_valid_location("Denver, Colorado "));
        assert!(!is_valid_location("Denver"));
        assert!(!is_valid_location(""));
    }
}
