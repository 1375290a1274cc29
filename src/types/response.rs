//! Response types for answered questions

use serde::{Deserialize, Serialize};

/// A passage retrieved by similarity search.
///
/// Derived fresh per query: the similarity always equals the cosine
/// similarity of the source record's embedding against the query embedding
/// at query time. Scores are never cached across queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedDocument {
    /// Id of the source record
    pub document_id: String,
    /// Passage text
    pub content: String,
    /// Cosine similarity against the query embedding, in [-1.0, 1.0]
    pub similarity: f32,
}

impl RetrievedDocument {
    /// Create a retrieved document
    pub fn new(document_id: impl Into<String>, content: impl Into<String>, similarity: f32) -> Self {
        Self {
            document_id: document_id.into(),
            content: content.into(),
            similarity,
        }
    }
}

/// Answer envelope returned for one question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    /// The question as asked
    pub question: String,
    /// Generated answer
    pub answer: String,
    /// Retrieved passages, ranked most similar first
    pub retrieved_documents: Vec<RetrievedDocument>,
    /// Wall-clock duration of the pipeline in milliseconds
    pub processing_time_ms: u64,
}

impl QuestionResponse {
    /// Create a new question response
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        retrieved_documents: Vec<RetrievedDocument>,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            retrieved_documents,
            processing_time_ms,
        }
    }
}
