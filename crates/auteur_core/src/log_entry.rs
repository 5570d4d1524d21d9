//! Execution log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One timestamped progress record emitted while a job runs.
///
/// Timestamps serialize as RFC 3339 UTC with fixed millisecond precision,
/// so sorting the serialized strings lexically matches chronological order.
///
/// # Examples
///
/// ```
/// use auteur_core::LogEntry;
/// use chrono::{TimeZone, Utc};
/// use serde_json::json;
///
/// let at = Utc.with_ymd_and_hms(2026, 10, 17, 9, 15, 2).unwrap();
/// let entry = LogEntry::new("narration", "Narration ready", at)
///     .with_data(json!({ "voiceId": "alloy" }));
///
/// let value = serde_json::to_value(&entry).unwrap();
/// assert_eq!(value["timestamp"], "2026-10-17T09:15:02.000Z");
/// assert_eq!(value["data"]["voiceId"], "alloy");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct LogEntry {
    /// Stage that produced the entry
    stage: String,
    /// Human-readable status
    message: String,
    /// When the entry was recorded
    #[serde(with = "millis_rfc3339")]
    timestamp: DateTime<Utc>,
    /// Optional structured payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl LogEntry {
    /// Create an entry without structured data.
    pub fn new(stage: impl Into<String>, message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            stage: stage.into(),
            message: message.into(),
            timestamp,
            data: None,
        }
    }

    /// Attach a structured payload.
    pub fn with_data(mut self, data: JsonValue) -> Self {
        self.data = Some(data);
        self
    }
}

mod millis_rfc3339 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
