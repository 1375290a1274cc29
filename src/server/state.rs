//! Application state for the RAG server

use std::sync::Arc;

use crate::config::RagConfig;
use crate::error::Result;
use crate::generation::PromptTemplate;
use crate::ingestion::CorpusLoader;
use crate::pipeline::{RagPipeline, TracingObserver};
use crate::providers::{EmbeddingProvider, LlmProvider, OllamaEmbedder, OllamaGenerator};
use crate::retrieval::SearchEngine;
use crate::store::VectorStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: RagConfig,
    store: Arc<VectorStore>,
    embedder: Arc<dyn EmbeddingProvider>,
    pipeline: RagPipeline,
}

impl AppState {
    /// Create application state with Ollama-backed providers
    pub fn new(config: RagConfig) -> Result<Self> {
        tracing::info!("Initializing RAG application state...");

        let embedder: Arc<dyn EmbeddingProvider> = Arc::new(OllamaEmbedder::new(&config.llm)?);
        let llm: Arc<dyn LlmProvider> = Arc::new(OllamaGenerator::new(&config.llm)?);
        tracing::info!(
            embed_model = %config.llm.embed_model,
            generate_model = %config.llm.generate_model,
            "Ollama providers initialized"
        );

        Self::with_providers(config, embedder, llm)
    }

    /// Create application state with explicit providers
    pub fn with_providers(
        config: RagConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        llm: Arc<dyn LlmProvider>,
    ) -> Result<Self> {
        let template = PromptTemplate::from_file(&config.pipeline.prompt_template_path)?;
        tracing::info!(
            template = %config.pipeline.prompt_template_path.display(),
            "Prompt template loaded"
        );

        let store = Arc::new(VectorStore::new());
        let pipeline = RagPipeline::new(
            SearchEngine::new(store.clone()),
            embedder.clone(),
            llm,
            template,
            config.retrieval.clone(),
        )
        .with_observer(Arc::new(TracingObserver));

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                embedder,
                pipeline,
            }),
        })
    }

    /// Load the configured corpus into the store
    pub async fn seed_corpus(&self) -> Result<usize> {
        let loader = CorpusLoader::new(self.inner.embedder.clone(), self.inner.store.clone());
        loader.load(&self.inner.config.corpus.path).await
    }

    /// Get configuration
    pub fn config(&self) -> &RagConfig {
        &self.inner.config
    }

    /// Get the vector store
    pub fn store(&self) -> &Arc<VectorStore> {
        &self.inner.store
    }

    /// Get the pipeline
    pub fn pipeline(&self) -> &RagPipeline {
        &self.inner.pipeline
    }
}
