//! Production pipeline for Auteur.
//!
//! This crate runs a job's six stages (narration, footage, music, render,
//! metadata, upload) in order, records an append-only execution log, and
//! turns the run into a success or failure result.
//!
//! # Features
//!
//! - **Sequential executor**: each stage runs once, only after its inputs exist
//! - **Execution log**: timestamped, structured entries returned on success and failure
//! - **Typed failures**: [`AgentExecutionError`] carries the partial log trail
//! - **Local studio**: deterministic collaborators for running without providers
//!
//! # Example
//!
//! ```rust
//! use auteur_core::JobRequest;
//! use auteur_pipeline::PipelineExecutor;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let request = JobRequest::builder()
//!     .script(
//!         "Five tools that changed how we work. Each one saves hours every week. \
//!          Stay to the end to see them combined into a single workflow.",
//!     )
//!     .build()?;
//!
//! let success = PipelineExecutor::default().run(&request).await?;
//! println!("Published {} ({} log entries)", success.video_url(), success.logs().len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aggregate;
mod error;
mod executor;
mod log;
mod studio;
mod text;

pub mod local;

pub use aggregate::{StageOutputs, aggregate_failure, aggregate_success};
pub use error::AgentExecutionError;
pub use executor::PipelineExecutor;
pub use log::ExecutionLog;
pub use studio::Studio;
