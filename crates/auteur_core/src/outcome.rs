//! Job outcomes and the `{ ok, ... }` response envelope.

use crate::{LogEntry, VideoMetadata};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value as JsonValue;

/// Result of a job whose every stage succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct JobSuccess {
    /// Public watch URL
    video_url: String,
    /// Platform video identifier
    video_id: String,
    /// Length of the rendered video in seconds
    duration_seconds: f64,
    /// Generated SEO metadata
    metadata: VideoMetadata,
    /// Every log entry the job produced
    #[serde(default)]
    logs: Vec<LogEntry>,
}

impl JobSuccess {
    /// Assemble a success result.
    pub fn new(
        video_url: impl Into<String>,
        video_id: impl Into<String>,
        duration_seconds: f64,
        metadata: VideoMetadata,
        logs: Vec<LogEntry>,
    ) -> Self {
        Self {
            video_url: video_url.into(),
            video_id: video_id.into(),
            duration_seconds,
            metadata,
            logs,
        }
    }
}

/// Result of a job that was rejected or failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct JobFailure {
    /// Human-readable cause
    error: String,
    /// Log trail up to the failure, when the pipeline had started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    logs: Option<Vec<LogEntry>>,
}

impl JobFailure {
    /// Failure without a log trail (rejected requests, unclassified errors).
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            logs: None,
        }
    }

    /// Failure carrying the log trail accumulated before it.
    pub fn with_logs(error: impl Into<String>, logs: Vec<LogEntry>) -> Self {
        Self {
            error: error.into(),
            logs: Some(logs),
        }
    }
}

/// Outcome of a job, serialized with an `ok` discriminator derived from the variant.
///
/// # Examples
///
/// ```
/// use auteur_core::{JobFailure, JobOutcome};
///
/// let outcome = JobOutcome::Failed(JobFailure::new("Invalid JSON payload"));
/// let value = serde_json::to_value(&outcome).unwrap();
/// assert_eq!(value["ok"], false);
/// assert_eq!(value["error"], "Invalid JSON payload");
/// assert!(value.get("logs").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, derive_more::From)]
pub enum JobOutcome {
    /// Every stage completed and the video was published
    Succeeded(JobSuccess),
    /// The job was rejected or a stage failed
    Failed(JobFailure),
}

impl JobOutcome {
    /// Whether the job succeeded.
    pub fn is_ok(&self) -> bool {
        matches!(self, JobOutcome::Succeeded(_))
    }

    /// Log trail carried by the outcome, if any.
    pub fn logs(&self) -> Option<&[LogEntry]> {
        match self {
            JobOutcome::Succeeded(success) => Some(success.logs()),
            JobOutcome::Failed(failure) => failure.logs().as_deref(),
        }
    }
}

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    ok: bool,
    #[serde(flatten)]
    body: &'a T,
}

impl Serialize for JobOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JobOutcome::Succeeded(success) => Envelope { ok: true, body: success }.serialize(serializer),
            JobOutcome::Failed(failure) => Envelope { ok: false, body: failure }.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for JobOutcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = JsonValue::deserialize(deserializer)?;
        let ok = value
            .as_object_mut()
            .and_then(|fields| fields.remove("ok"))
            .and_then(|ok| ok.as_bool())
            .ok_or_else(|| de::Error::missing_field("ok"))?;

        if ok {
            serde_json::from_value(value)
                .map(JobOutcome::Succeeded)
                .map_err(de::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(JobOutcome::Failed)
                .map_err(de::Error::custom)
        }
    }
}
