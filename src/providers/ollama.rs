//! Ollama-backed providers for embeddings and generation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::LlmConfig;
use crate::error::{Error, Result};
use crate::types::Embedding;

use super::embedding::EmbeddingProvider;
use super::llm::LlmProvider;

#[derive(Serialize)]
struct EmbedRequest {
    model: String,
    prompt: String,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: Vec<f32>,
}

#[derive(Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

fn build_client(config: &LlmConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .pool_max_idle_per_host(5)
        .build()
        .map_err(|e| Error::Config(format!("failed to create HTTP client: {e}")))
}

async fn tags_reachable(client: &Client, base_url: &str) -> Result<bool> {
    let url = format!("{base_url}/api/tags");
    match client.get(&url).send().await {
        Ok(response) => Ok(response.status().is_success()),
        Err(_) => Ok(false),
    }
}

/// Ollama embedding provider (nomic-embed-text or similar models)
pub struct OllamaEmbedder {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaEmbedder {
    /// Create a new Ollama embedder
    pub fn new(config: &LlmConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
            base_url: config.base_url.clone(),
            model: config.embed_model.clone(),
        })
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let url = format!("{}/api/embeddings", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&EmbedRequest {
                model: self.model.clone(),
                prompt: text.to_string(),
            })
            .send()
            .await
            .map_err(|e| Error::embedding(format!("Ollama request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::embedding(format!(
                "Ollama returned status {} for model '{}'",
                response.status(),
                self.model
            )));
        }

        let body: EmbedResponse = response
            .json()
            .await
            .map_err(|e| Error::embedding(format!("Invalid embedding response: {e}")))?;

        Ok(body.embedding)
    }

    async fn health_check(&self) -> Result<bool> {
        tags_reachable(&self.client, &self.base_url).await
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

/// Ollama LLM provider for answer generation
pub struct OllamaGenerator {
    client: Client,
    base_url: String,
    model: String,
    temperature: f32,
}

impl OllamaGenerator {
    /// Create a new Ollama generator
    pub fn new(config: &LlmConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
            base_url: config.base_url.clone(),
            model: config.generate_model.clone(),
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl LlmProvider for OllamaGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest {
                model: self.model.clone(),
                prompt: prompt.to_string(),
                stream: false,
                options: GenerateOptions {
                    temperature: self.temperature,
                },
            })
            .send()
            .await
            .map_err(|e| Error::generation(format!("Ollama request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::generation(format!(
                "Ollama returned status {} for model '{}'",
                response.status(),
                self.model
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::generation(format!("Invalid generation response: {e}")))?;

        Ok(body.response)
    }

    async fn health_check(&self) -> Result<bool> {
        tags_reachable(&self.client, &self.base_url).await
    }

    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
