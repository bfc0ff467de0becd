//! Scraper service wire types.

use serde::Deserialize;

use vidsight_models::VideoComment;

/// Response of `GET /videos/{id}/comments`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentsResponse {
    #[serde(default)]
    pub comments: Vec<VideoComment>,
}

/// Response of `GET /videos/{id}/transcript`.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptResponse {
    #[serde(default)]
    pub segments: Vec<TranscriptSegment>,
}

/// One transcript line with its text.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
}

impl TranscriptResponse {
    /// Join segment texts into the transcript string.
    pub fn joined_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
