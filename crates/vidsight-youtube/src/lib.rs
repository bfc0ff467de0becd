//! Client for the YouTube scraper sidecar service.
//!
//! The sidecar owns the actual scraping (video info, popularity-sorted
//! comments, transcript). This crate exposes it as a typed data source and
//! implements the degradation contract: comment and transcript sub-fetches
//! may fail independently and are substituted with empty values, while an
//! info-fetch failure fails the whole lookup.

pub mod client;
pub mod error;
pub mod types;

pub use client::{ScraperConfig, YoutubeScraperClient};
pub use error::{ScrapeError, ScrapeResult};
