//! Pipeline failure carrying the partial log trail.

use auteur_core::{JobFailure, LogEntry};
use auteur_error::PipelineError;

/// A failed job: the triggering error plus every log entry produced before it.
///
/// # Examples
///
/// ```
/// use auteur_error::{PipelineError, PipelineErrorKind};
/// use auteur_pipeline::AgentExecutionError;
///
/// let err = AgentExecutionError::new(PipelineError::new(PipelineErrorKind::Timeout(300)), Vec::new());
/// assert_eq!(err.message(), "Pipeline exceeded the maximum duration of 300s");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, derive_getters::Getters)]
#[display("Agent execution failed: {}", error)]
pub struct AgentExecutionError {
    /// What went wrong
    #[error(source)]
    error: PipelineError,
    /// Log entries up to and including the failure
    logs: Vec<LogEntry>,
}

impl AgentExecutionError {
    /// Pair a pipeline error with the log trail accumulated before it.
    pub fn new(error: PipelineError, logs: Vec<LogEntry>) -> Self {
        Self { error, logs }
    }

    /// Human-readable cause, without source location.
    pub fn message(&self) -> String {
        self.error.kind.to_string()
    }

    /// Convert into the failure result returned to callers.
    pub fn into_failure(self) -> JobFailure {
        JobFailure::with_logs(self.message(), self.logs)
    }
}
