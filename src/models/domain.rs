use serde::{Deserialize, Serialize};

/// One descriptor scored by the service for the submitted document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub descriptor: String,
    pub quantity: i64,
    pub score: f64,
}

impl ScoreEntry {
    pub fn new(descriptor: impl Into<String>, quantity: i64, score: f64) -> Self {
        Self {
            descriptor: descriptor.into(),
            quantity,
            score,
        }
    }
}
