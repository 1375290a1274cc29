//! Error types for the RAG pipeline

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for RAG operations
pub type Result<T> = std::result::Result<T, Error>;

/// RAG pipeline errors
///
/// Validation errors (`InvalidRecord`, `InvalidQuery`) indicate caller
/// misuse. Capability failures (`Embedding`, `Generation`) are typically
/// transient and network-related. Every variant is terminal for the
/// current request; no retries happen inside this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rejected document at insertion (empty id, content, or embedding)
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Rejected query input (blank question, empty query embedding)
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Stored embedding dimension differs from the query's
    #[error("Dimension mismatch for record '{id}': expected {expected}, found {actual}")]
    DimensionMismatch {
        id: String,
        expected: usize,
        actual: usize,
    },

    /// Embedding capability failed or returned an empty vector
    #[error("Embedding generation failed: {0}")]
    Embedding(String),

    /// Similarity search failed during the pipeline
    #[error("Retrieval failed: {0}")]
    Retrieval(#[source] Box<Error>),

    /// Prompt template unreadable or missing a placeholder
    #[error("Prompt template error: {0}")]
    Template(String),

    /// Generation capability failed or returned empty output
    #[error("Answer generation failed: {0}")]
    Generation(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Create an invalid record error
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord(message.into())
    }

    /// Create an invalid query error
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery(message.into())
    }

    /// Create an embedding error
    pub fn embedding(message: impl Into<String>) -> Self {
        Self::Embedding(message.into())
    }

    /// Wrap a search failure as a pipeline retrieval error
    pub fn retrieval(source: Error) -> Self {
        Self::Retrieval(Box::new(source))
    }

    /// Create a template error
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template(message.into())
    }

    /// Create a generation error
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            Error::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            Error::InvalidRecord(_) => (StatusCode::BAD_REQUEST, "invalid_record"),
            Error::InvalidQuery(_) => (StatusCode::BAD_REQUEST, "invalid_query"),
            Error::DimensionMismatch { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "dimension_mismatch")
            }
            Error::Embedding(_) => (StatusCode::BAD_GATEWAY, "embedding_error"),
            Error::Retrieval(source) => {
                // Caller misuse inside retrieval still surfaces as 400
                let status = match source.as_ref() {
                    Error::InvalidQuery(_) => StatusCode::BAD_REQUEST,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, "retrieval_error")
            }
            Error::Template(_) => (StatusCode::INTERNAL_SERVER_ERROR, "template_error"),
            Error::Generation(_) => (StatusCode::SERVICE_UNAVAILABLE, "generation_error"),
            Error::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "io_error"),
            Error::Json(_) => (StatusCode::BAD_REQUEST, "json_error"),
            Error::Http(_) => (StatusCode::BAD_GATEWAY, "http_error"),
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}
