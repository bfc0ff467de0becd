//! Completion provider capability trait.

use async_trait::async_trait;

use crate::error::CompletionResult;
use crate::types::ChatTurn;

/// Abstract text-generation capability consumed by the insight engine.
///
/// `goal` is the role description for the model (the system turn); `turns`
/// are the prior conversation turns, newest last. Implementations own their
/// transport concerns: timeouts, retry policy, and error mapping.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, goal: &str, turns: &[ChatTurn]) -> CompletionResult<String>;
}
