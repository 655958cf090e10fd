use crate::config::ServiceSettings;
use crate::core::coercion::{coerce_quantity, coerce_score, CoercionError};
use crate::models::{RawScoreEntry, ScoreEntry, ScoreRequest, ScoresResponse};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when talking to the scoring service
#[derive(Debug, Error)]
pub enum ScoreServiceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for the DeCS highlighter scoring endpoint
pub struct ScoreClient {
    url: String,
    client: Client,
}

impl ScoreClient {
    /// Create a new client for the configured endpoint
    pub fn new(settings: &ServiceSettings) -> Result<Self, ScoreServiceError> {
        let client = Client::builder()
            .user_agent(concat!("decs-scores/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            url: settings.endpoint(),
            client,
        })
    }

    /// Endpoint the scores are posted to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Score a document
    ///
    /// Transport failures, non-2xx statuses and non-JSON bodies are logged
    /// and yield an empty list. A JSON body that does not have the expected
    /// shape is an error; no partial list is returned.
    pub async fn fetch_scores(&self, text: &str) -> Result<Vec<ScoreEntry>, ScoreServiceError> {
        tracing::debug!("Posting {} bytes to {}", text.len(), self.url);

        let body = match self.post_document(text).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Failed to reach scoring service at {}: {}", self.url, e);
                return Ok(Vec::new());
            }
        };

        let scores = parse_scores(body)?;
        tracing::info!("Received {} scores", scores.len());
        Ok(scores)
    }

    async fn post_document(&self, text: &str) -> Result<Value, reqwest::Error> {
        self.client
            .post(&self.url)
            .json(&ScoreRequest::new(text))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

/// Why a single `scores` element was rejected
#[derive(Debug, Error)]
enum EntryError {
    #[error(transparent)]
    Shape(#[from] serde_json::Error),

    #[error(transparent)]
    Coercion(#[from] CoercionError),
}

/// Map a decoded response body to score entries, preserving order
pub fn parse_scores(body: Value) -> Result<Vec<ScoreEntry>, ScoreServiceError> {
    let response: ScoresResponse = serde_json::from_value(body).map_err(|e| {
        ScoreServiceError::InvalidResponse(format!("Failed to parse scores: {}", e))
    })?;

    response
        .scores
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            to_entry(item).map_err(|e| {
                ScoreServiceError::InvalidResponse(format!("scores[{}]: {}", index, e))
            })
        })
        .collect()
}

fn to_entry(item: Value) -> Result<ScoreEntry, EntryError> {
    let raw: RawScoreEntry = serde_json::from_value(item)?;

    Ok(ScoreEntry {
        quantity: coerce_quantity(&raw.quantity)?,
        score: coerce_score(&raw.score)?,
        descriptor: raw.descriptor,
    })
}
