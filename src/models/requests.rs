use serde::Serialize;

/// Flag value the service reads as "false"
const FLAG_OFF: &str = "f";

/// Body of the POST sent to the highlighter service
///
/// Text, positions and descriptor listings are switched off; only the
/// `scores` section of the response is consumed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest<'a> {
    pub show_text: &'static str,
    pub show_positions: &'static str,
    pub show_descriptors: &'static str,
    pub document: &'a str,
}

impl<'a> ScoreRequest<'a> {
    pub fn new(document: &'a str) -> Self {
        Self {
            show_text: FLAG_OFF,
            show_positions: FLAG_OFF,
            show_descriptors: FLAG_OFF,
            document,
        }
    }
}
