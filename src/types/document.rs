//! Document record stored in the vector store

use serde::{Deserialize, Serialize};

/// A fixed-length dense embedding vector.
///
/// The dimension is determined by the embedding capability and must match
/// across all stored and query vectors; mismatches are a hard error at
/// query time, never padded or truncated.
pub type Embedding = Vec<f32>;

/// A document with its embedding, as held by the vector store.
///
/// Immutable once inserted except via re-insertion under the same id,
/// which overwrites the previous record (last write wins).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Caller-assigned unique id (non-empty)
    pub id: String,
    /// Passage text (non-empty)
    pub content: String,
    /// Embedding vector (non-empty, dimension fixed per deployment)
    pub embedding: Embedding,
}

impl DocumentRecord {
    /// Create a new document record
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        embedding: Embedding,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            embedding,
        }
    }
}
