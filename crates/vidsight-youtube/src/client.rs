//! Scraper sidecar HTTP client.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, error, info};

use vidsight_models::{VideoComment, VideoData, VideoId, VideoInfo};

use crate::error::{ScrapeError, ScrapeResult};
use crate::types::{CommentsResponse, TranscriptResponse};

/// Configuration for the scraper client.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Base URL of the scraper service
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// How many popularity-sorted comments to fetch
    pub max_comments: u32,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8002".to_string(),
            timeout: Duration::from_secs(30),
            max_comments: 5,
        }
    }
}

impl ScraperConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("SCRAPER_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8002".to_string()),
            timeout: Duration::from_secs(
                std::env::var("SCRAPER_SERVICE_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            max_comments: std::env::var("SCRAPER_MAX_COMMENTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        }
    }
}

/// Client for the YouTube scraper service.
pub struct YoutubeScraperClient {
    http: Client,
    config: ScraperConfig,
}

impl YoutubeScraperClient {
    /// Create a new scraper client.
    pub fn new(config: ScraperConfig) -> ScrapeResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ScrapeError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ScrapeResult<Self> {
        Self::new(ScraperConfig::from_env())
    }

    /// Fetch title and engagement counts. Must succeed for a lookup to
    /// proceed; the service reports likes as -1 when it cannot parse them.
    pub async fn get_video_info(&self, video_id: &VideoId) -> ScrapeResult<VideoInfo> {
        let url = format!("{}/videos/{}", self.config.base_url, video_id);
        debug!(%video_id, "fetching video info");

        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ScrapeError::NotFound(video_id.to_string()));
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ScrapeError::RequestFailed(format!(
                "scraper returned {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }

    /// Fetch comments sorted by descending popularity.
    pub async fn get_video_comments(&self, video_id: &VideoId) -> ScrapeResult<Vec<VideoComment>> {
        let url = format!(
            "{}/videos/{}/comments?sort=popular&limit={}",
            self.config.base_url, video_id, self.config.max_comments
        );
        debug!(%video_id, limit = self.config.max_comments, "fetching video comments");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ScrapeError::RequestFailed(format!(
                "scraper returned {}: {}",
                status, body
            )));
        }

        let comments: CommentsResponse = response.json().await?;
        Ok(comments.comments)
    }

    /// Fetch the transcript joined into one newline-separated string.
    pub async fn get_video_transcript(&self, video_id: &VideoId) -> ScrapeResult<String> {
        let url = format!("{}/videos/{}/transcript", self.config.base_url, video_id);
        debug!(%video_id, "fetching video transcript");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ScrapeError::RequestFailed(format!(
                "scraper returned {}: {}",
                status, body
            )));
        }

        let transcript: TranscriptResponse = response.json().await?;
        Ok(transcript.joined_text())
    }

    /// Fetch everything known about a video.
    ///
    /// Comment and transcript sub-fetches are less reliable than the info
    /// fetch and degrade to empty values instead of failing the lookup.
    pub async fn get_video_data(&self, video_id: &VideoId) -> ScrapeResult<VideoData> {
        let info = self.get_video_info(video_id).await?;

        let comments = match self.get_video_comments(video_id).await {
            Ok(comments) => comments,
            Err(err) => {
                error!(%video_id, error = %err, "failed to fetch video comments");
                Vec::new()
            }
        };
        info!(%video_id, count = comments.len(), "fetched video comments");

        let transcript = match self.get_video_transcript(video_id).await {
            Ok(text) if text.is_empty() => None,
            Ok(text) => Some(text),
            Err(err) => {
                error!(%video_id, error = %err, "failed to fetch video transcript");
                None
            }
        };
        info!(%video_id, available = transcript.is_some(), "fetched video transcript");

        Ok(VideoData {
            info,
            comments,
            transcript,
        })
    }
}
