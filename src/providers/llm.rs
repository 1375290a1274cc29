//! LLM provider trait for generating answers

use async_trait::async_trait;

use crate::error::Result;

/// Trait for LLM-based text generation
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate text for a filled prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
