//! Insight orchestration input and output models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::video::{VideoComment, VideoData};

/// Substituted for the video summary when the video has no transcript.
pub const VIDEO_SUMMARY_UNAVAILABLE: &str =
    "Video summary is unavailable: this video has no transcript.";

/// Substituted for the comment digest when the video has no comments.
pub const COMMENTS_UNAVAILABLE: &str = "No comments are available for this video.";

/// Substituted for the clickbait assessment when it could not be computed.
pub const CLICKBAIT_UNAVAILABLE: &str = "Clickbait assessment is unavailable for this video.";

/// Immutable input to one insight orchestration run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VideoInsightInput {
    /// Video title, may be empty
    pub title: String,

    /// Full transcript text; empty when the video has no transcript
    pub transcript: String,

    /// Comments ordered by descending popularity, may be empty
    pub comments: Vec<VideoComment>,

    /// Like count, negative when unknown
    pub likes: i64,

    /// View count
    pub views: u64,
}

impl VideoInsightInput {
    pub fn new(
        title: impl Into<String>,
        transcript: impl Into<String>,
        comments: Vec<VideoComment>,
        likes: i64,
        views: u64,
    ) -> Self {
        Self {
            title: title.into(),
            transcript: transcript.into(),
            comments,
            likes,
            views,
        }
    }
}

impl From<VideoData> for VideoInsightInput {
    fn from(data: VideoData) -> Self {
        Self {
            title: data.info.title,
            transcript: data.transcript.unwrap_or_default(),
            comments: data.comments,
            likes: data.info.likes,
            views: data.info.views,
        }
    }
}

/// Output of one insight orchestration run.
///
/// Always fully populated: every field is either a genuine model-derived
/// value or one of the fixed sentinel strings above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VideoInsightResult {
    /// One-sentence transcript summary, or [`VIDEO_SUMMARY_UNAVAILABLE`]
    pub video_summary: String,

    /// One-sentence comment digest, or [`COMMENTS_UNAVAILABLE`]
    pub comments_summary: String,

    /// Clickbait ratio (0-100) plus rationale, or [`CLICKBAIT_UNAVAILABLE`]
    pub clickbait_assessment: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::{VideoInfo, LIKES_UNKNOWN};

    #[test]
    fn input_from_video_data_defaults_missing_transcript_to_empty() {
        let data = VideoData {
            info: VideoInfo {
                title: "Some title".to_string(),
                views: 1000,
                likes: LIKES_UNKNOWN,
            },
            comments: vec![],
            transcript: None,
        };

        let input = VideoInsightInput::from(data);
        assert_eq!(input.title, "Some title");
        assert!(input.transcript.is_empty());
        assert_eq!(input.likes, LIKES_UNKNOWN);
    }

    #[test]
    fn result_round_trips_through_json() {
        let result = VideoInsightResult {
            video_summary: "A video about things.".to_string(),
            comments_summary: COMMENTS_UNAVAILABLE.to_string(),
            clickbait_assessment: "Ratio: 10. Title matches the content.".to_string(),
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: VideoInsightResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
