//! Retrieval-augmented pipeline orchestrator
//!
//! Sequences embed -> retrieve -> assemble + template -> generate as a
//! strictly sequential state machine with no branching except failure
//! exits. Each stage's failure short-circuits the request; no stage after
//! a failure runs, and the store is never mutated mid-pipeline.

pub mod observer;

pub use observer::{PipelineObserver, Stage, TracingObserver};

use std::sync::Arc;
use std::time::Instant;

use crate::config::RetrievalConfig;
use crate::error::{Error, Result};
use crate::generation::{PromptBuilder, PromptTemplate};
use crate::providers::{EmbeddingProvider, LlmProvider};
use crate::retrieval::SearchEngine;
use crate::types::{QuestionResponse, RetrievedDocument};

/// The retrieval-augmented question answering pipeline.
///
/// One instance serves many concurrent requests; the only shared mutable
/// state is the vector store behind the search engine.
pub struct RagPipeline {
    engine: SearchEngine,
    embedder: Arc<dyn EmbeddingProvider>,
    llm: Arc<dyn LlmProvider>,
    template: PromptTemplate,
    retrieval: RetrievalConfig,
    observers: Vec<Arc<dyn PipelineObserver>>,
}

impl RagPipeline {
    /// Create a new pipeline
    pub fn new(
        engine: SearchEngine,
        embedder: Arc<dyn EmbeddingProvider>,
        llm: Arc<dyn LlmProvider>,
        template: PromptTemplate,
        retrieval: RetrievalConfig,
    ) -> Self {
        Self {
            engine,
            embedder,
            llm,
            template,
            retrieval,
            observers: Vec::new(),
        }
    }

    /// Attach an observer invoked at stage boundaries
    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Access the search engine (and through it, the store)
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// Answer a question through the complete RAG pipeline.
    ///
    /// Wall-clock duration is measured from entry to completion and
    /// reported in the envelope on the success path.
    pub async fn answer_question(&self, question: &str) -> Result<QuestionResponse> {
        let start = Instant::now();

        if question.trim().is_empty() {
            return Err(Error::invalid_query("question cannot be empty"));
        }

        tracing::info!(question, "Processing question");

        // Stage 1: embed the question
        let query_embedding = self
            .run_stage(Stage::Embed, || async {
                let embedding = self.embedder.embed(question).await?;
                if embedding.is_empty() {
                    return Err(Error::embedding(format!(
                        "provider '{}' returned an empty embedding",
                        self.embedder.name()
                    )));
                }
                Ok(embedding)
            })
            .await?;

        // Stage 2: retrieve relevant passages
        let retrieved = self
            .run_stage(Stage::Retrieve, || async {
                self.engine
                    .search(
                        &query_embedding,
                        self.retrieval.max_results,
                        self.retrieval.similarity_threshold,
                    )
                    .map_err(Error::retrieval)
            })
            .await?;

        tracing::info!(
            count = retrieved.len(),
            similarities = ?retrieved.iter().map(|d| d.similarity).collect::<Vec<_>>(),
            "Retrieved passages"
        );

        // Stage 3: assemble context and fill the template
        let prompt = self
            .run_stage(Stage::Assemble, || async {
                Ok(self.build_prompt(question, &retrieved))
            })
            .await?;

        // Stage 4: generate the answer
        let answer = self
            .run_stage(Stage::Generate, || async {
                let answer = self.llm.generate(&prompt).await?;
                if answer.is_empty() {
                    return Err(Error::generation(format!(
                        "provider '{}' returned empty output",
                        self.llm.name()
                    )));
                }
                Ok(answer)
            })
            .await?;

        let processing_time_ms = start.elapsed().as_millis() as u64;
        tracing::info!(processing_time_ms, "Question processed");

        Ok(QuestionResponse::new(
            question,
            answer,
            retrieved,
            processing_time_ms,
        ))
    }

    /// Assemble the numbered context and substitute it into the template
    fn build_prompt(&self, question: &str, retrieved: &[RetrievedDocument]) -> String {
        let context = PromptBuilder::build_context(retrieved);
        tracing::debug!(
            context_chars = context.len(),
            "Built prompt with retrieved context"
        );
        self.template.render(&context, question)
    }

    /// Run one stage, notifying observers around it
    async fn run_stage<T, F, Fut>(&self, stage: Stage, f: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        for observer in &self.observers {
            observer.on_stage_start(stage);
        }

        let stage_start = Instant::now();
        match f().await {
            Ok(value) => {
                let elapsed = stage_start.elapsed();
                for observer in &self.observers {
                    observer.on_stage_complete(stage, elapsed);
                }
                Ok(value)
            }
            Err(error) => {
                for observer in &self.observers {
                    observer.on_stage_failure(stage, &error);
                }
                Err(error)
            }
        }
    }
}
