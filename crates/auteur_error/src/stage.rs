//! Errors raised by pipeline collaborators.

/// Failure reported by a single stage collaborator (narration, render, upload, ...).
///
/// The executor attaches the stage name when it lifts this into a
/// [`PipelineError`](crate::PipelineError).
///
/// # Examples
///
/// ```
/// use auteur_error::StageError;
///
/// let err = StageError::new("voice 'nova' is not available");
/// assert_eq!(err.message, "voice 'nova' is not available");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Stage Error: {} at line {} in {}", message, line, file)]
pub struct StageError {
    /// Human-readable cause
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl StageError {
    /// Create a new StageError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
