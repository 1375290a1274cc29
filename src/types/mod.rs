//! Core types for the RAG pipeline

pub mod document;
pub mod query;
pub mod response;

pub use document::{DocumentRecord, Embedding};
pub use query::QuestionRequest;
pub use response::{QuestionResponse, RetrievedDocument};
