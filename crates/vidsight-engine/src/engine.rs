//! The insight orchestrator.

use std::sync::Arc;

use tracing::{debug, error, info};

use vidsight_ai_client::{CompletionProvider, CompletionResult};
use vidsight_models::{
    VideoInsightInput, VideoInsightResult, CLICKBAIT_UNAVAILABLE, COMMENTS_UNAVAILABLE,
    VIDEO_SUMMARY_UNAVAILABLE,
};

use crate::prompts;

/// Transcript characters kept when falling back to a raw excerpt.
const MAX_SIMPLE_SUMMARY_CHARS: usize = 100;

/// Orchestrates the three insight requests for one video.
///
/// Stateless across calls; every run is fully isolated. `produce` never
/// fails: provider errors are absorbed into sentinel values or the coarse
/// raw-excerpt fallback.
pub struct InsightEngine {
    provider: Arc<dyn CompletionProvider>,
}

impl InsightEngine {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Produce the three-field insight result for one video.
    ///
    /// The transcript-summary and comments-summary requests run
    /// concurrently; the clickbait request follows because it needs the
    /// video summary. A failure during the summary fan-out degrades the
    /// whole result to raw excerpts, a failure during the clickbait step
    /// degrades that field alone.
    pub async fn produce(&self, input: &VideoInsightInput) -> VideoInsightResult {
        info!(
            transcript_chars = input.transcript.len(),
            comments = input.comments.len(),
            "producing video insights"
        );

        let (video_summary, comments_summary) = match self.fetch_summaries(input).await {
            Ok(summaries) => summaries,
            Err(err) => {
                error!(error = %err, "summary fan-out failed, returning simple answer");
                return Self::coarse_fallback(input);
            }
        };

        let clickbait_assessment = if input.transcript.is_empty() {
            // Never assessed without a genuine video summary.
            debug!("no transcript, skipping clickbait assessment");
            CLICKBAIT_UNAVAILABLE.to_string()
        } else {
            match self.fetch_clickbait(input, &video_summary).await {
                Ok(text) => text,
                Err(err) => {
                    error!(error = %err, "clickbait assessment failed, substituting sentinel");
                    CLICKBAIT_UNAVAILABLE.to_string()
                }
            }
        };

        VideoInsightResult {
            video_summary,
            comments_summary,
            clickbait_assessment,
        }
    }

    /// Concurrent fan-out of the two independent summary requests.
    ///
    /// Either request is skipped (sentinel substituted) when its input is
    /// absent. Any provider error fails the whole fan-out; the caller then
    /// applies the coarse fallback.
    async fn fetch_summaries(
        &self,
        input: &VideoInsightInput,
    ) -> CompletionResult<(String, String)> {
        let video_fut = async {
            if input.transcript.is_empty() {
                debug!("no transcript, substituting video summary sentinel");
                return Ok(None);
            }
            let prompt = prompts::video_summary_prompt(&input.title, &input.transcript);
            self.provider
                .complete(prompt.goal, &prompt.turns)
                .await
                .map(Some)
        };

        let comments_fut = async {
            if input.comments.is_empty() {
                debug!("no comments, substituting comment digest sentinel");
                return Ok(None);
            }
            let prompt = prompts::comments_summary_prompt(&input.title, &input.comments);
            self.provider
                .complete(prompt.goal, &prompt.turns)
                .await
                .map(Some)
        };

        let (video, comments) = tokio::join!(video_fut, comments_fut);

        Ok((
            video?.unwrap_or_else(|| VIDEO_SUMMARY_UNAVAILABLE.to_string()),
            comments?.unwrap_or_else(|| COMMENTS_UNAVAILABLE.to_string()),
        ))
    }

    /// Dependent clickbait request, issued after the fan-out resolves.
    async fn fetch_clickbait(
        &self,
        input: &VideoInsightInput,
        video_summary: &str,
    ) -> CompletionResult<String> {
        let comments_total = (!input.comments.is_empty()).then(|| input.comments.len());
        let prompt = prompts::clickbait_prompt(
            &input.title,
            video_summary,
            input.likes,
            input.views,
            comments_total,
        );
        self.provider.complete(prompt.goal, &prompt.turns).await
    }

    /// Degraded answer used when the summary fan-out itself fails: a raw
    /// transcript excerpt and the most popular comment verbatim.
    fn coarse_fallback(input: &VideoInsightInput) -> VideoInsightResult {
        let video_summary = if input.transcript.is_empty() {
            VIDEO_SUMMARY_UNAVAILABLE.to_string()
        } else {
            input
                .transcript
                .chars()
                .take(MAX_SIMPLE_SUMMARY_CHARS)
                .collect()
        };

        let comments_summary = input
            .comments
            .first()
            .map(|comment| comment.text.clone())
            .unwrap_or_else(|| COMMENTS_UNAVAILABLE.to_string());

        VideoInsightResult {
            video_summary,
            comments_summary,
            clickbait_assessment: CLICKBAIT_UNAVAILABLE.to_string(),
        }
    }
}
