// src/providers/mod.rs

use crate::errors::Result;

pub mod gemini;

/// What a model sent back for one prompt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Completion {
    /// Text of the first part of the first candidate, if there was one.
    pub text: Option<String>,
    /// Why generation stopped, e.g. `STOP` or `MAX_TOKENS`.
    pub finish_reason: Option<String>,
    pub latency_ms: u64,
}

/// A common trait for Large Language Model (LLM) backends.
///
/// Not using async_trait here, so implementers return the future directly.
pub trait LlmProvider: Send + Sync {
    /// Sends `prompt` to the configured model.
    fn generate(&self, prompt: &str) -> impl std::future::Future<Output = Result<Completion>> + Send;
}
