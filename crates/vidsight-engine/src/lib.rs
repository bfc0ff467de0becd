//! Insight orchestration and degradation engine.
//!
//! Given raw video data (title, transcript, comments, engagement counts),
//! [`InsightEngine::produce`] asks the completion provider for a video
//! summary, a comment digest, and a clickbait assessment, and assembles a
//! fully-populated [`vidsight_models::VideoInsightResult`] under any
//! combination of missing inputs and provider failures.
//!
//! [`coalesce::InflightRegistry`] wraps the engine so concurrent identical
//! requests share a single orchestration run.

pub mod coalesce;
pub mod engine;
pub mod prompts;

pub use coalesce::InflightRegistry;
pub use engine::InsightEngine;
