use serde::{Deserialize, Serialize};
use vader_sentiment::SentimentIntensityAnalyzer;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Sentiment {
    pub neg: f64,      // Proportions in [0, 1]
    pub neu: f64,
    pub pos: f64,
    pub compound: f64, // Overall polarity in [-1, 1]
}

// Must return the same scores for the same text
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> Sentiment;
}

pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> Sentiment {
        if text.trim().is_empty() {
            return Sentiment::default();
        }

        // Same precision as NLTK's polarity_scores: 3 places, 4 for compound
        let scores = self.analyzer.polarity_scores(text);
        let get = |key: &str, places: i32| round_to(scores.get(key).copied().unwrap_or(0.0), places);
        Sentiment {
            neg: get("neg", 3),
            neu: get("neu", 3),
            pos: get("pos", 3),
            compound: get("compound", 4),
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round_ties_even() / scale
}
