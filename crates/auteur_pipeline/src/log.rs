//! Per-job execution log.

use auteur_core::{LogEntry, StageName};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Append-only record of a single job's progress.
///
/// Cloning yields another handle onto the same buffer; this lets the
/// boundary snapshot a job it aborted. Entries are never modified or
/// removed once appended, and timestamps never decrease: an entry recorded
/// while the wall clock has stepped backwards takes its predecessor's time.
///
/// # Examples
///
/// ```
/// use auteur_core::StageName;
/// use auteur_pipeline::ExecutionLog;
///
/// let log = ExecutionLog::new();
/// log.append(StageName::Narration, "Synthesizing narration", None);
/// log.append(StageName::Narration, "Narration ready", None);
///
/// let entries = log.snapshot();
/// assert_eq!(entries.len(), 2);
/// assert!(entries[0].timestamp() <= entries[1].timestamp());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExecutionLog {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl ExecutionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry stamped with the current time.
    pub fn append(&self, stage: StageName, message: impl Into<String>, data: Option<JsonValue>) {
        self.append_at(stage, message, data, Utc::now());
    }

    /// Append an entry recorded at `at`, clamped to the previous entry's timestamp.
    pub fn append_at(
        &self,
        stage: StageName,
        message: impl Into<String>,
        data: Option<JsonValue>,
        at: DateTime<Utc>,
    ) {
        let mut entries = self.entries.lock();
        let timestamp = match entries.last() {
            Some(previous) if *previous.timestamp() > at => *previous.timestamp(),
            _ => at,
        };
        let entry = LogEntry::new(stage.as_str(), message, timestamp);
        let entry = match data {
            Some(data) => entry.with_data(data),
            None => entry,
        };
        entries.push(entry);
    }

    /// Copy of every entry appended so far, in append order.
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether no entry has been appended.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
