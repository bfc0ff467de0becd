//! Axum HTTP API server.
//!
//! This crate provides:
//! - The `/api/v1/ai-insights/youtube-videos` endpoint
//! - Health endpoints
//! - CORS, request-id and request-logging middleware
//! - Application state wiring for the scraper, engine and cache

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
