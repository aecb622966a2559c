use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::info;

use crate::annotator::annotate;
use crate::error::{ApiError, INVALID_LOCATION, MISSING_PARAMETERS};
use crate::filter::{filter, ReviewFilter};
use crate::models::location::is_valid_location;
use crate::models::review::Review;
use crate::params::{first, parse_params};
use crate::state::AppState;

/// Registers `GET /` and `POST /`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(get_reviews))
            .route(web::post().to(create_review)),
    );
}

// GET / - scored reviews, best first, narrowed by the query string
pub async fn get_reviews(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let review_filter = ReviewFilter::from_params(&parse_params(req.query_string()))?;

    let reviews = state.store.snapshot().await;
    let total = reviews.len();
    let scored = annotate(reviews, state.scorer.as_ref());
    let response = filter(scored, &review_filter);

    info!("[API] Returning {} of {} reviews", response.len(), total);
    Ok(HttpResponse::Ok().json(response))
}

// POST / - store a new review from a JSON or form-encoded body
pub async fn create_review(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let submission = if req.content_type().eq_ignore_ascii_case("application/json") {
        ReviewSubmission::from_json(&body)?
    } else {
        ReviewSubmission::from_form(&body)?
    };
    let review = submission.into_review()?;

    state.store.append(review.clone()).await?;
    info!("[API] Stored review {} for {}", review.review_id, review.location);

    Ok(HttpResponse::Created().json(review))
}

/// The client-supplied part of a review, before validation.
#[derive(Debug, Default, PartialEq)]
pub struct ReviewSubmission {
    pub location: Option<String>,
    pub review_body: Option<String>,
}

// Fields may arrive as a plain string or as a list whose first entry is used
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldValue {
    One(String),
    Many(Vec<String>),
}

impl FieldValue {
    fn into_first(self) -> Option<String> {
        match self {
            FieldValue::One(value) => Some(value),
            FieldValue::Many(values) => values.into_iter().next(),
        }
    }
}

#[derive(Deserialize)]
struct JsonSubmission {
    #[serde(rename = "Location")]
    location: Option<FieldValue>,
    #[serde(rename = "ReviewBody")]
    review_body: Option<FieldValue>,
}

impl ReviewSubmission {
    pub fn from_json(body: &[u8]) -> Result<Self, ApiError> {
        let raw: JsonSubmission = serde_json::from_slice(body)?;
        Ok(Self {
            location: raw.location.and_then(FieldValue::into_first),
            review_body: raw.review_body.and_then(FieldValue::into_first),
        })
    }

    pub fn from_form(body: &[u8]) -> Result<Self, ApiError> {
        let fields = parse_params(std::str::from_utf8(body)?);
        Ok(Self {
            location: first(&fields, "Location").map(str::to_owned),
            review_body: first(&fields, "ReviewBody").map(str::to_owned),
        })
    }

    /// Checks the required fields and stamps a new review with its id and time.
    pub fn into_review(self) -> Result<Review, ApiError> {
        let review_body = self.review_body.filter(|body| !body.trim().is_empty());
        let (Some(location), Some(review_body)) = (self.location, review_body) else {
            return Err(ApiError::Validation(MISSING_PARAMETERS.into()));
        };

        if !is_valid_location(&location) {
            return Err(ApiError::Validation(INVALID_LOCATION.into()));
        }

        Ok(Review::new(location, review_body))
    }
}
