// Query strings and form bodies share one decoder
use std::collections::HashMap;

pub type Params = HashMap<String, Vec<String>>;

/// Parses `key=value&...` into a multi-map. Blank values and bare keys are dropped.
pub fn parse_params(input: &str) -> Params {
    let mut params = Params::new();

    for pair in input.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        params
            .entry(decode(key))
            .or_default()
            .push(decode(value));
    }

    params
}

/// First value supplied for `key`, if any.
pub fn first<'a>(params: &'a Params, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .and_then(|values| values.first())
        .map(String::as_str)
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_percent_and_plus() {
        let params = parse_params("location=Denver,%20Colorado&ReviewBody=Great+service%21");
        assert_eq!(first(&params, "location"), Some("Denver, Colorado"));
        assert_eq!(first(&params, "ReviewBody"), Some("Great service!"));
    }

    #[test]
    fn test_blank_values_and_bare_keys_are_dropped() {
        let params = parse_params("location=&start_date&end_date=2024-01-01");
        assert_eq!(first(&params, "location"), None);
        assert_eq!(first(&params, "start_date"), None);
        assert_eq!(first(&params, "end_date"), Some("2024-01-01"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_repeated_keys_keep_order() {
        let params = parse_params("Location=Fresno%2C+California&Location=Tucson%2C+Arizona");
        assert_eq!(
            params.get("Location").unwrap(),
            &vec![
                "Fresno, California".to_string(),
                "Tucson, Arizona".to_string()
            ]
        );
        assert_eq!(first(&params, "Location"), Some("Fresno, California"));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_params("").is_empty());
    }

    #[test]
    fn test_value_may_contain_equals() {
        let params = parse_params("ReviewBody=a=b");
        assert_eq!(first(&params, "ReviewBody"), Some("a=b"));
    }
}
