use serde::Deserialize;
use serde_json::Value;

/// Response body of the highlighter service
///
/// Only `scores` is read; a body without it carries no scores. Elements
/// stay untyped so each one can be checked on its own.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoresResponse {
    #[serde(default)]
    pub scores: Vec<Value>,
}

/// A `scores` element before numeric coercion
///
/// The service is free to send numbers as JSON numbers or as strings, so
/// `quantity` and `score` stay untyped until coerced.
#[derive(Debug, Clone, Deserialize)]
pub struct RawScoreEntry {
    pub descriptor: String,
    pub quantity: Value,
    pub score: Value,
}
