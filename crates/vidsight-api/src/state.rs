//! Application state.

use std::sync::Arc;

use vidsight_ai_client::OpenAiProvider;
use vidsight_cache::InsightCache;
use vidsight_engine::{InflightRegistry, InsightEngine};
use vidsight_youtube::YoutubeScraperClient;

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub scraper: Arc<YoutubeScraperClient>,
    pub insights: Arc<InflightRegistry>,
    pub cache: Arc<InsightCache>,
}

impl AppState {
    /// Create new application state from the environment.
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let provider = OpenAiProvider::from_env()?;
        let engine = InsightEngine::new(Arc::new(provider));
        let insights = Arc::new(InflightRegistry::new(engine));

        let scraper = Arc::new(YoutubeScraperClient::from_env()?);
        let cache = Arc::new(InsightCache::from_env()?);

        Ok(Self {
            config,
            scraper,
            insights,
            cache,
        })
    }
}
