//! Runs one job on its own task under the wall-clock ceiling.

use crate::AppState;
use auteur_core::{JobRequest, JobSuccess};
use auteur_error::{AuteurError, AuteurErrorKind, PipelineError, PipelineErrorKind, ServerError, ServerErrorKind};
use auteur_pipeline::{AgentExecutionError, ExecutionLog};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::task::{JoinError, JoinHandle};

/// Fallback message for failures that carry no usable description.
pub const UNEXPECTED_ERROR: &str = "Unexpected error";

/// Why a dispatched job did not succeed.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum DispatchError {
    /// A stage failed or the ceiling was hit; carries the log trail
    #[display("{}", _0)]
    Agent(AgentExecutionError),
    /// Anything else, such as a panicking collaborator
    #[display("{}", _0)]
    Unexpected(AuteurError),
}

impl DispatchError {
    /// Message for the response body.
    pub fn client_message(&self) -> String {
        match self {
            DispatchError::Agent(error) => error.message(),
            DispatchError::Unexpected(error) => match error.kind() {
                AuteurErrorKind::Server(ServerError {
                    kind: ServerErrorKind::Task(message),
                    ..
                }) => message.clone(),
                _ => UNEXPECTED_ERROR.to_string(),
            },
        }
    }
}

/// Execute exactly one pipeline run for `request`.
///
/// The run is spawned so a panicking collaborator cannot take the handler
/// down with it. When the ceiling elapses the task is aborted and the
/// entries logged so far are returned with a timeout error. Dropping the
/// returned future, as happens when the client disconnects, aborts the
/// task too.
#[tracing::instrument(skip(state, request), fields(ceiling_secs = state.max_duration().as_secs()))]
pub async fn run_job(state: &AppState, request: JobRequest) -> Result<JobSuccess, DispatchError> {
    let log = ExecutionLog::new();
    let job_log = log.clone();
    let executor = Arc::clone(state.executor());

    let mut handle = JobTask(tokio::spawn(async move { executor.execute(&request, &job_log).await }));

    match tokio::time::timeout(state.max_duration(), &mut handle).await {
        Ok(Ok(result)) => result.map_err(DispatchError::from),
        Ok(Err(join_error)) => {
            tracing::error!(error = %join_error, "Pipeline task did not complete");
            Err(AuteurError::from(task_failure(join_error)).into())
        }
        Err(_) => {
            drop(handle);
            let ceiling = state.max_duration().as_secs();
            tracing::warn!(ceiling_secs = ceiling, entries = log.len(), "Job exceeded ceiling, aborted");
            Err(AgentExecutionError::new(
                PipelineError::new(PipelineErrorKind::Timeout(ceiling)),
                log.snapshot(),
            )
            .into())
        }
    }
}

/// Spawned job that is aborted when dropped.
struct JobTask<T>(JoinHandle<T>);

impl<T> Future for JobTask<T> {
    type Output = Result<T, JoinError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.0).poll(cx)
    }
}

impl<T> Drop for JobTask<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

fn task_failure(error: JoinError) -> ServerError {
    let message = if error.is_panic() {
        let payload = error.into_panic();
        payload
            .downcast_ref::<&str>()
            .map(|message| message.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| UNEXPECTED_ERROR.to_string())
    } else {
        UNEXPECTED_ERROR.to_string()
    };
    ServerError::new(ServerErrorKind::Task(message))
}
