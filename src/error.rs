use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::db::StoreError;
use crate::filter::FilterError;

pub const MISSING_PARAMETERS: &str = "Missing required parameters";
pub const INVALID_LOCATION: &str = "Invalid location";

/// Request failures, mapped onto HTTP responses.
#[derive(Error, Debug)]
pub enum ApiError {
    /// 400 - missing or invalid client input
    #[error("{0}")]
    Validation(String),

    /// 500 - the review log could not be written
    #[error(transparent)]
    Store(#[from] StoreError),

    /// 500 - anything else
    #[error("{0}")]
    Unexpected(String),
}

impl From<FilterError> for ApiError {
    fn from(err: FilterError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Unexpected(err.to_string())
    }
}

impl From<std::str::Utf8Error> for ApiError {
    fn from(err: std::str::Utf8Error) -> Self {
        ApiError::Unexpected(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) | ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(message) => {
                warn!("[API] Rejected request: {message}");
                HttpResponse::BadRequest().json(json!({ "error": message }))
            }
            _ => {
                error!("[API] Request failed: {self}");
                HttpResponse::InternalServerError().json(json!({
                    "error": "Internal server error",
                    "message": self.to_string(),
                }))
            }
        }
    }
}
