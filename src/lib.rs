//! DeCS Scores - client for the DeCS highlighter scoring service
//!
//! Resolves a document from a command-line argument, posts it to the
//! highlighter and normalizes the returned descriptor scores.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use self::config::{ServiceSettings, Settings};
pub use self::core::{resolve_input, ResolveError};
pub use models::ScoreEntry;
pub use services::{ScoreClient, ScoreServiceError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let settings = Settings::default();
        assert_eq!(resolve_input("text").unwrap(), "text");
        assert!(settings.service.endpoint().ends_with("/decshighlighter/serv"));
    }
}
