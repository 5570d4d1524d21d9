//! Top-level error wrapper types.

use crate::{ConfigError, PipelineError, ServerError, StageError, ValidationError};

/// The foundation error enum unifying every Auteur error.
///
/// # Examples
///
/// ```
/// use auteur_error::{AuteurError, StageError};
///
/// let err: AuteurError = StageError::new("encoder crashed").into();
/// assert!(format!("{}", err).contains("Stage Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum AuteurErrorKind {
    /// Request validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Pipeline execution error
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Collaborator stage error
    #[from(StageError)]
    Stage(StageError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// HTTP boundary error
    #[from(ServerError)]
    Server(ServerError),
}

/// Auteur error with kind discrimination.
///
/// # Examples
///
/// ```
/// use auteur_error::{AuteurErrorKind, AuteurResult, ConfigError};
///
/// fn might_fail() -> AuteurResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), AuteurErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Auteur Error: {}", _0)]
pub struct AuteurError(Box<AuteurErrorKind>);

impl AuteurError {
    /// Create a new error from a kind.
    pub fn new(kind: AuteurErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AuteurErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to AuteurErrorKind
impl<T> From<T> for AuteurError
where
    T: Into<AuteurErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Auteur operations.
pub type AuteurResult<T> = std::result::Result<T, AuteurError>;
