//! Redis cache for computed video insights.
//!
//! Results are stored as JSON under `vidsight:insights:{video_id}` with a
//! TTL, so repeat lookups for a recently analyzed video skip scraping and
//! the completion provider entirely.

pub mod error;

pub use error::{CacheError, CacheResult};

use std::time::Duration;

use redis::AsyncCommands;
use tracing::debug;

use vidsight_models::{VideoId, VideoInsightResult};

const KEY_PREFIX: &str = "vidsight:insights";

/// Cache configuration.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Redis URL
    pub redis_url: String,
    /// How long cached insights stay valid
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_url: "redis://localhost:6379".to_string(),
            ttl: Duration::from_secs(600),
        }
    }
}

impl CacheConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            redis_url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            ttl: Duration::from_secs(
                std::env::var("API_CACHE_TTL")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(600),
            ),
        }
    }
}

/// Insight cache client.
pub struct InsightCache {
    client: redis::Client,
    config: CacheConfig,
}

impl InsightCache {
    /// Create a new cache client.
    pub fn new(config: CacheConfig) -> CacheResult<Self> {
        let client = redis::Client::open(config.redis_url.as_str())?;
        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> CacheResult<Self> {
        Self::new(CacheConfig::from_env())
    }

    fn key(video_id: &VideoId) -> String {
        format!("{}:{}", KEY_PREFIX, video_id)
    }

    /// Look up cached insights for a video.
    pub async fn get(&self, video_id: &VideoId) -> CacheResult<Option<VideoInsightResult>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let payload: Option<String> = conn.get(Self::key(video_id)).await?;
        match payload {
            Some(json) => {
                debug!(%video_id, "insight cache hit");
                Ok(Some(serde_json::from_str(&json)?))
            }
            None => {
                debug!(%video_id, "insight cache miss");
                Ok(None)
            }
        }
    }

    /// Store insights for a video with the configured TTL.
    pub async fn put(&self, video_id: &VideoId, result: &VideoInsightResult) -> CacheResult<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let payload = serde_json::to_string(result)?;
        conn.set_ex::<_, _, ()>(Self::key(video_id), payload, self.config.ttl.as_secs())
            .await?;

        debug!(%video_id, ttl_secs = self.config.ttl.as_secs(), "cached insights");
        Ok(())
    }
}
