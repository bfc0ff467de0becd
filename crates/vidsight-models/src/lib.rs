//! Shared data models for the Vidsight backend.
//!
//! This crate provides Serde-serializable types for:
//! - Scraped video data (info, comments, transcript)
//! - Insight orchestration input and output
//! - Sentinel strings substituted for unavailable insight fields

pub mod insight;
pub mod video;

// Re-export common types
pub use insight::{
    VideoInsightInput, VideoInsightResult, CLICKBAIT_UNAVAILABLE, COMMENTS_UNAVAILABLE,
    VIDEO_SUMMARY_UNAVAILABLE,
};
pub use video::{VideoComment, VideoData, VideoId, VideoInfo, LIKES_UNKNOWN};
