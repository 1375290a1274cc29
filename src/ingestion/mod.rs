//! Startup-time corpus loading
//!
//! Walks a directory of `.txt` passages, embeds each file's content, and
//! inserts the records into the store. Records are keyed by the file stem
//! so re-running ingestion overwrites rather than duplicates. When the
//! corpus directory is absent, a small built-in sample corpus is loaded so
//! the server is demoable out of the box.

use std::path::Path;
use std::sync::Arc;
use walkdir::WalkDir;

use crate::error::Result;
use crate::providers::EmbeddingProvider;
use crate::store::VectorStore;
use crate::types::DocumentRecord;

/// Built-in passages used when no corpus directory exists
const SAMPLE_CORPUS: &[(&str, &str)] = &[
    (
        "rust-ownership",
        "Rust's ownership system guarantees memory safety without a garbage \
         collector. Each value has a single owner, and the value is dropped \
         when its owner goes out of scope.",
    ),
    (
        "rust-concurrency",
        "Rust prevents data races at compile time: shared state must be \
         protected by synchronization primitives, and the Send and Sync \
         traits mark what may cross thread boundaries.",
    ),
    (
        "vector-search",
        "Vector similarity search ranks documents by the closeness of their \
         embeddings to a query embedding, most often using cosine similarity \
         over dense fixed-length vectors.",
    ),
];

/// Loads passages into the vector store at startup
pub struct CorpusLoader {
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<VectorStore>,
}

impl CorpusLoader {
    /// Create a new corpus loader
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, store: Arc<VectorStore>) -> Self {
        Self { embedder, store }
    }

    /// Load all `.txt` files under `dir`, or the sample corpus if the
    /// directory does not exist. Returns the number of records inserted.
    pub async fn load(&self, dir: impl AsRef<Path>) -> Result<usize> {
        let dir = dir.as_ref();

        if !dir.is_dir() {
            tracing::warn!(
                corpus_dir = %dir.display(),
                "Corpus directory not found, loading built-in sample corpus"
            );
            return self.load_samples().await;
        }

        let mut inserted = 0;

        for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }

            let content = std::fs::read_to_string(path)?;
            let content = content.trim();
            if content.is_empty() {
                tracing::warn!(file = %path.display(), "Skipping empty corpus file");
                continue;
            }

            let id = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

            self.insert_passage(&id, content).await?;
            inserted += 1;
        }

        tracing::info!(inserted, corpus_dir = %dir.display(), "Corpus loaded");
        Ok(inserted)
    }

    /// Load the built-in sample corpus
    pub async fn load_samples(&self) -> Result<usize> {
        for (id, content) in SAMPLE_CORPUS {
            self.insert_passage(id, content).await?;
        }
        tracing::info!(inserted = SAMPLE_CORPUS.len(), "Sample corpus loaded");
        Ok(SAMPLE_CORPUS.len())
    }

    /// Embed one passage and insert it
    async fn insert_passage(&self, id: &str, content: &str) -> Result<()> {
        let embedding = self.embedder.embed(content).await?;
        self.store
            .insert(DocumentRecord::new(id, content, embedding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use async_trait::async_trait;

    struct UnitEmbedder;

    #[async_trait]
    impl EmbeddingProvider for UnitEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
            Ok(vec![1.0, 0.0])
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }

        fn name(&self) -> &str {
            "unit"
        }
    }

    #[tokio::test]
    async fn missing_directory_falls_back_to_samples() {
        let store = Arc::new(VectorStore::new());
        let loader = CorpusLoader::new(Arc::new(UnitEmbedder), store.clone());

        let inserted = loader.load("/nonexistent/corpus").await.unwrap();
        assert_eq!(inserted, SAMPLE_CORPUS.len());
        assert_eq!(store.len(), SAMPLE_CORPUS.len());
        assert!(store.get("rust-ownership").is_some());
    }

    #[tokio::test]
    async fn reloading_overwrites_instead_of_duplicating() {
        let store = Arc::new(VectorStore::new());
        let loader = CorpusLoader::new(Arc::new(UnitEmbedder), store.clone());

        loader.load_samples().await.unwrap();
        loader.load_samples().await.unwrap();
        assert_eq!(store.len(), SAMPLE_CORPUS.len());
    }
}
