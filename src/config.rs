//! Configuration for the RAG pipeline and its server shell

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RagConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Retrieval configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    /// Pipeline configuration
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Ollama/LLM configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Corpus loading configuration
    #[serde(default)]
    pub corpus: CorpusConfig,
}

impl RagConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read config '{}': {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config '{}': {}", path.display(), e)))
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Minimum similarity for a passage to qualify (default: 0.7)
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f32,
    /// Maximum number of passages to retrieve (default: 2)
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_similarity_threshold() -> f32 {
    0.7
}

fn default_max_results() -> usize {
    2
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            max_results: default_max_results(),
        }
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Path to the prompt template with `{context}` and `{question}` slots
    pub prompt_template_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            prompt_template_path: PathBuf::from("prompts/rag_template.txt"),
        }
    }
}

/// Ollama/LLM configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Ollama base URL
    pub base_url: String,
    /// Embedding model name
    pub embed_model: String,
    /// Generation model name
    pub generate_model: String,
    /// Sampling temperature for generation
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            embed_model: "nomic-embed-text".to_string(),
            generate_model: "llama3.2:3b".to_string(),
            temperature: 0.1,
            timeout_secs: 120,
        }
    }
}

/// Corpus loading configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Directory of `.txt` passages ingested at startup
    pub path: PathBuf,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("corpus"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = RagConfig::default();
        assert_eq!(config.retrieval.similarity_threshold, 0.7);
        assert_eq!(config.retrieval.max_results, 2);
        assert_eq!(
            config.pipeline.prompt_template_path,
            PathBuf::from("prompts/rag_template.txt")
        );
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: RagConfig = toml::from_str(
            r#"
            [retrieval]
            max_results = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.retrieval.max_results, 5);
        assert_eq!(config.retrieval.similarity_threshold, 0.7);
        assert_eq!(config.server.port, 8080);
    }
}
