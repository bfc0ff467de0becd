//! Scraped video data models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Like count reported when the upstream source could not parse it.
pub const LIKES_UNKNOWN: i64 = -1;

/// YouTube video identifier (the 11-character watch id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Basic video info.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VideoInfo {
    /// Video title
    pub title: String,

    /// View count
    pub views: u64,

    /// Like count, [`LIKES_UNKNOWN`] when it could not be determined
    #[serde(default = "default_likes")]
    pub likes: i64,
}

fn default_likes() -> i64 {
    LIKES_UNKNOWN
}

/// A single video comment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VideoComment {
    /// Comment author display name
    pub author: String,

    /// Comment text
    pub text: String,

    /// Comment vote count
    #[serde(default)]
    pub votes: i64,
}

/// Everything scraped for one video.
///
/// Comments are ordered by descending popularity as delivered by the
/// upstream source. Both `comments` and `transcript` may be absent when
/// their sub-fetches failed; that is an expected condition.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VideoData {
    pub info: VideoInfo,

    #[serde(default)]
    pub comments: Vec<VideoComment>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}
