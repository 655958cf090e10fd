// Service exports
pub mod scoring;

pub use scoring::{parse_scores, ScoreClient, ScoreServiceError};
