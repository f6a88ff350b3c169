// src/config.rs

use dotenvy::dotenv;
use std::env;

/// Scores awarded to the top five ranks, best rank first.
/// Every rank past the end of this table scores 0.
pub const SCORING_VALUES: [i64; 5] = [100, 80, 60, 40, 20];

/// Minimum number of ranked, scored correct answers an Input question
/// needs before it is considered ready for final publication.
pub const MIN_CORRECT_FOR_FINAL: usize = 3;

/// Similarity threshold used when no override is configured.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.75;

#[derive(Debug, Clone)]
pub struct Config {
    /// Two answers whose text similarity reaches this value are merged.
    pub similarity_threshold: f64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let similarity_threshold = env::var("SIMILARITY_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SIMILARITY_THRESHOLD);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            similarity_threshold,
            rust_log,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            rust_log: "info".to_string(),
        }
    }
}
