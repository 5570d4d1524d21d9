//! HTTP boundary for Auteur.
//!
//! Exposes a single job endpoint that validates a script submission, runs
//! the production pipeline under a wall-clock ceiling, and answers with a
//! uniform `{ ok, ... }` envelope.
//!
//! # Routes
//!
//! - `POST /api/agent`: run a production job
//! - `GET /health`: liveness probe
//!
//! # Example
//!
//! ```rust,no_run
//! use auteur_pipeline::PipelineExecutor;
//! use auteur_server::{ServerConfig, serve};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::builder()
//!         .bind_address("0.0.0.0:8080")
//!         .max_duration_secs(120u64)
//!         .build()?;
//!     serve(&config, PipelineExecutor::default()).await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod dispatch;
mod observability;
mod server;
mod state;

pub use api::create_router;
pub use config::{ServerConfig, ServerConfigBuilder};
pub use dispatch::{DispatchError, run_job};
pub use observability::{ObservabilityConfig, init_observability, shutdown_observability};
pub use server::serve;
pub use state::AppState;
