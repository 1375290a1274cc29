//! ragline: retrieval-augmented question answering over an in-memory
//! vector store
//!
//! Answers natural-language questions by retrieving semantically related
//! passages from a private corpus and feeding them to a language model as
//! grounding context. The crate provides the in-memory vector store, the
//! brute-force cosine-similarity search engine, the context assembler, and
//! the orchestration pipeline; embedding and generation are opaque
//! capabilities behind provider traits (Ollama-backed by default).

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod pipeline;
pub mod providers;
pub mod retrieval;
pub mod server;
pub mod store;
pub mod types;

pub use config::RagConfig;
pub use error::{Error, Result};
pub use pipeline::RagPipeline;
pub use retrieval::SearchEngine;
pub use store::VectorStore;
pub use types::{DocumentRecord, QuestionRequest, QuestionResponse, RetrievedDocument};
