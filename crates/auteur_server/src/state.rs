//! Shared router state.

use crate::ServerConfig;
use auteur_pipeline::PipelineExecutor;
use std::sync::Arc;
use std::time::Duration;

/// State shared by every request: the executor and the job ceiling.
///
/// Holds nothing mutable; concurrent jobs only share the executor.
#[derive(Debug, Clone)]
pub struct AppState {
    executor: Arc<PipelineExecutor>,
    max_duration: Duration,
}

impl AppState {
    /// Creates state from an executor and an explicit ceiling.
    pub fn new(executor: PipelineExecutor, max_duration: Duration) -> Self {
        Self {
            executor: Arc::new(executor),
            max_duration,
        }
    }

    /// Creates state using the ceiling from `config`.
    pub fn from_config(executor: PipelineExecutor, config: &ServerConfig) -> Self {
        Self::new(executor, config.max_duration())
    }

    /// The shared executor.
    pub fn executor(&self) -> &Arc<PipelineExecutor> {
        &self.executor
    }

    /// Wall-clock ceiling for a whole job.
    pub fn max_duration(&self) -> Duration {
        self.max_duration
    }
}
