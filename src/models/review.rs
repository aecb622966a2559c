// src/models/review.rs
use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sentiment::Sentiment;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A stored customer review. Field order matches the columns of the review log.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    #[serde(rename = "ReviewId")]
    pub review_id: String, // Server-generated, never client-supplied
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Timestamp", with = "timestamp_format")]
    pub timestamp: NaiveDateTime, // Second precision, local time of the write
    #[serde(rename = "ReviewBody")]
    pub review_body: String,
}

impl Review {
    /// Builds a new review stamped with a fresh id and the current local time.
    pub fn new(location: String, review_body: String) -> Self {
        let now = Local::now().naive_local();
        Self {
            review_id: Uuid::new_v4().to_string(),
            location,
            timestamp: now.with_nanosecond(0).unwrap_or(now),
            review_body,
        }
    }
}

/// A review together with the sentiment computed from its body at read time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScoredReview {
    #[serde(rename = "ReviewId")]
    pub review_id: String,
    #[serde(rename = "ReviewBody")]
    pub review_body: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Timestamp", with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    pub sentiment: Sentiment,
}

impl ScoredReview {
    pub fn new(review: Review, sentiment: Sentiment) -> Self {
        Self {
            review_id: review.review_id,
            review_body: review.review_body,
            location: review.location,
            timestamp: review.timestamp,
            sentiment,
        }
    }
}

mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
