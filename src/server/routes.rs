//! HTTP routes for the question-answering endpoint

use axum::{extract::State, Json};

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::{QuestionRequest, QuestionResponse};

/// POST /ask - answer a question using RAG
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> Result<Json<QuestionResponse>> {
    if request.question.trim().is_empty() {
        return Err(Error::invalid_query("question cannot be empty"));
    }

    tracing::info!(question = %request.question, "Received question");

    let response = state.pipeline().answer_question(&request.question).await?;

    tracing::info!(
        retrieved = response.retrieved_documents.len(),
        processing_time_ms = response.processing_time_ms,
        "Returning answer"
    );

    Ok(Json(response))
}

/// GET /health - liveness probe
pub async fn health() -> &'static str {
    "OK"
}
