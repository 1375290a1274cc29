//! Stage-boundary hooks for pipeline observability
//!
//! Logging and metrics are cross-cutting concerns, not part of the
//! algorithmic contract, so they hang off optional observers invoked at
//! stage boundaries instead of living inside the core logic.

use std::time::Duration;

use crate::error::Error;

/// The four sequential pipeline stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Embed the raw question
    Embed,
    /// Similarity search over the store
    Retrieve,
    /// Context assembly and template substitution
    Assemble,
    /// Answer generation
    Generate,
}

impl Stage {
    /// Stage name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Embed => "embed",
            Self::Retrieve => "retrieve",
            Self::Assemble => "assemble",
            Self::Generate => "generate",
        }
    }
}

/// Callbacks invoked at pipeline stage boundaries.
///
/// All methods default to no-ops so observers implement only what they
/// care about. Observers must not fail the request.
pub trait PipelineObserver: Send + Sync {
    /// A stage is about to run
    fn on_stage_start(&self, _stage: Stage) {}

    /// A stage completed successfully
    fn on_stage_complete(&self, _stage: Stage, _elapsed: Duration) {}

    /// A stage failed; the pipeline short-circuits after this call
    fn on_stage_failure(&self, _stage: Stage, _error: &Error) {}
}

/// Default observer that reports stage progress through `tracing`
#[derive(Debug, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_stage_start(&self, stage: Stage) {
        tracing::debug!(stage = stage.name(), "Pipeline stage started");
    }

    fn on_stage_complete(&self, stage: Stage, elapsed: Duration) {
        tracing::debug!(
            stage = stage.name(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Pipeline stage completed"
        );
    }

    fn on_stage_failure(&self, stage: Stage, error: &Error) {
        tracing::error!(stage = stage.name(), %error, "Pipeline stage failed");
    }
}
