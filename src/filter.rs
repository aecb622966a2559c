use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;
use tracing::debug;

use crate::models::location::is_valid_location;
use crate::models::review::ScoredReview;
use crate::params::{first, Params};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    #[error("Invalid {field} '{value}', expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
}

/// Optional predicates from the `GET /` query string. Unset fields match
/// everything.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReviewFilter {
    pub location: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl ReviewFilter {
    /// Reads `location`, `start_date` and `end_date`. A malformed date fails the
    /// whole request rather than being skipped.
    pub fn from_params(params: &Params) -> Result<Self, FilterError> {
        Ok(Self {
            location: first(params, "location").map(str::to_owned),
            start: parse_date(params, "start_date")?,
            end: parse_date(params, "end_date")?,
        })
    }

    pub fn matches(&self, review: &ScoredReview) -> bool {
        if let Some(location) = self.effective_location() {
            if review.location != location {
                return false;
            }
        }
        if let Some(start) = self.start {
            if review.timestamp < midnight(start) {
                return false;
            }
        }
        // Upper bound is midnight of the end date, so later times that day fall outside.
        if let Some(end) = self.end {
            if review.timestamp > midnight(end) {
                return false;
            }
        }
        true
    }

    /// The location predicate, or `None` when the requested location is not one
    /// of the valid locations and is therefore ignored.
    fn effective_location(&self) -> Option<&str> {
        let location = self.location.as_deref()?;
        if is_valid_location(location) {
            Some(location)
        } else {
            debug!(location, "ignoring filter on unknown location");
            None
        }
    }
}

/// Keeps the reviews matching every set predicate, preserving input order.
pub fn filter(mut scored: Vec<ScoredReview>, filter: &ReviewFilter) -> Vec<ScoredReview> {
    scored.retain(|review| filter.matches(review));
    scored
}

fn parse_date(params: &Params, field: &'static str) -> Result<Option<NaiveDate>, FilterError> {
    first(params, field)
        .map(|value| {
            NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| FilterError::InvalidDate {
                field,
                value: value.to_owned(),
            })
        })
        .transpose()
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}
