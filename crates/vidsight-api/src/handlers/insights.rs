//! Video insight handlers.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use vidsight_models::{VideoId, VideoInsightInput, VideoInsightResult};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Insight lookup query params.
#[derive(Deserialize)]
pub struct InsightsQuery {
    pub video_id: String,
}

/// Insight response, field names kept stable for existing consumers.
#[derive(Serialize)]
pub struct YoutubeVideoResponse {
    pub video_summary: String,
    pub comments_summary: String,
    pub clickbait_ratio: String,
}

impl From<VideoInsightResult> for YoutubeVideoResponse {
    fn from(result: VideoInsightResult) -> Self {
        Self {
            video_summary: result.video_summary,
            comments_summary: result.comments_summary,
            clickbait_ratio: result.clickbait_assessment,
        }
    }
}

/// Get a short analysis of a YouTube video.
pub async fn get_youtube_video_insights(
    State(state): State<AppState>,
    Query(query): Query<InsightsQuery>,
) -> ApiResult<Json<YoutubeVideoResponse>> {
    let video_id = query.video_id.trim();
    if video_id.is_empty() {
        return Err(ApiError::invalid_request("video_id must not be empty"));
    }
    let video_id = VideoId::from_string(video_id);

    match state.cache.get(&video_id).await {
        Ok(Some(cached)) => return Ok(Json(cached.into())),
        Ok(None) => {}
        Err(err) => warn!(%video_id, error = %err, "cache lookup failed, continuing uncached"),
    }

    info!(%video_id, "fetching video data");
    let video_data = state.scraper.get_video_data(&video_id).await?;

    info!(%video_id, "requesting model inferences");
    let input = VideoInsightInput::from(video_data);
    let result = state.insights.produce(video_id.as_str(), input).await;

    if let Err(err) = state.cache.put(&video_id, &result).await {
        warn!(%video_id, error = %err, "failed to cache insights");
    }

    Ok(Json(result.into()))
}
