//! Request types for the ask endpoint

use serde::{Deserialize, Serialize};

/// Request body for `POST /ask`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    /// The question to answer
    pub question: String,
}

impl QuestionRequest {
    /// Create a new question request
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}
