//! Error types for the Auteur service.
//!
//! This crate provides the foundation error types used throughout the Auteur workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use auteur_error::{AuteurResult, ConfigError};
//!
//! fn load() -> AuteurResult<u64> {
//!     Err(ConfigError::new("max_duration_secs must be positive"))?
//! }
//!
//! match load() {
//!     Ok(secs) => println!("Ceiling: {}", secs),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod pipeline;
mod server;
mod stage;
mod validation;

pub use config::ConfigError;
pub use error::{AuteurError, AuteurErrorKind, AuteurResult};
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use stage::StageError;
pub use validation::{ValidationError, ValidationErrorKind};
