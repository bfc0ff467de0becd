//! Provider-agnostic completion client.
//!
//! This crate provides:
//! - The [`CompletionProvider`] capability trait consumed by the insight engine
//! - Chat turn types shared with request builders
//! - An OpenAI chat-completions implementation with error mapping and a
//!   single retry on rate limiting

pub mod error;
pub mod openai;
pub mod provider;
pub mod types;

pub use error::{CompletionError, CompletionResult};
pub use openai::{OpenAiConfig, OpenAiProvider};
pub use provider::CompletionProvider;
pub use types::{ChatTurn, TurnRole};
