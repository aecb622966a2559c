use std::cmp::Ordering;

use crate::models::review::{Review, ScoredReview};
use crate::sentiment::SentimentScorer;

/// Scores every review, highest compound first. Equal scores keep store order.
pub fn annotate(reviews: Vec<Review>, scorer: &dyn SentimentScorer) -> Vec<ScoredReview> {
    let mut scored: Vec<ScoredReview> = reviews
        .into_iter()
        .map(|review| {
            let sentiment = scorer.score(&review.review_body);
            ScoredReview::new(review, sentiment)
        })
        .collect();

    // partial_cmp so that -0.0 and 0.0 tie
    scored.sort_by(|a, b| {
        b.sentiment
            .compound
            .partial_cmp(&a.sentiment.compound)
            .unwrap_or(Ordering::Equal)
    });
    scored
}
