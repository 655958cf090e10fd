// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::ScoreEntry;
pub use requests::ScoreRequest;
pub use responses::{RawScoreEntry, ScoresResponse};
