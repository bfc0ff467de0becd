//! API handlers.

pub mod health;
pub mod insights;

pub use health::{health, ready};
pub use insights::get_youtube_video_insights;
