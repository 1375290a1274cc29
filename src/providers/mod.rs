//! Provider abstractions for the embedding and generation capabilities
//!
//! The pipeline treats both capabilities as opaque: given text, produce a
//! fixed-length vector; given a prompt, produce text. Implementations live
//! behind these traits so the core never depends on a concrete backend.

pub mod embedding;
pub mod llm;
pub mod ollama;

pub use embedding::EmbeddingProvider;
pub use llm::LlmProvider;
pub use ollama::{OllamaEmbedder, OllamaGenerator};
