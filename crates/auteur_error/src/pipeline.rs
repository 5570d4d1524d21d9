//! Pipeline execution error types.

/// Specific error conditions for a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PipelineErrorKind {
    /// A named stage reported a failure
    #[display("Stage '{}' failed: {}", stage, message)]
    StageFailed {
        /// Stage name
        stage: String,
        /// Cause reported by the collaborator
        message: String,
    },
    /// A stage returned output that violates the pipeline's expectations
    #[display("Stage '{}' produced invalid output: {}", stage, message)]
    InvalidOutput {
        /// Stage name
        stage: String,
        /// What was wrong with the output
        message: String,
    },
    /// The whole job exceeded the configured wall-clock ceiling, in seconds
    #[display("Pipeline exceeded the maximum duration of {}s", _0)]
    Timeout(u64),
}

/// Error type for pipeline execution.
///
/// # Examples
///
/// ```
/// use auteur_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::StageFailed {
///     stage: "render".to_string(),
///     message: "encoder crashed".to_string(),
/// });
/// assert!(err.kind.to_string().contains("render"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Name of the stage responsible, if the failure is stage-scoped.
    pub fn stage(&self) -> Option<&str> {
        match &self.kind {
            PipelineErrorKind::StageFailed { stage, .. }
            | PipelineErrorKind::InvalidOutput { stage, .. } => Some(stage),
            PipelineErrorKind::Timeout(_) => None,
        }
    }
}
