//! Request validation error types.

/// Specific reasons an inbound job request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Body could not be parsed as JSON
    #[display("Invalid JSON payload")]
    InvalidPayload,
    /// Body parsed but violated the request schema; holds every field error joined
    #[display("{}", _0)]
    InvalidRequest(String),
}

/// Error type for request validation.
///
/// The `Display` of the kind is the exact message returned to the client;
/// the wrapper adds the source location for logs.
///
/// # Examples
///
/// ```
/// use auteur_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::InvalidPayload);
/// assert_eq!(err.kind.to_string(), "Invalid JSON payload");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific error condition
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Message suitable for the response body.
    pub fn client_message(&self) -> String {
        self.kind.to_string()
    }
}
