//! Request schema validation.
//!
//! The body is parsed into an untyped JSON value first so that every field
//! violation can be collected and reported together.

use crate::{JobRequest, PrivacyStatus};
use auteur_error::{ValidationError, ValidationErrorKind};
use serde_json::{Map, Value as JsonValue};
use std::str::FromStr;

/// Minimum script length, in characters.
pub const MIN_SCRIPT_CHARS: usize = 100;

/// Parse a raw request body and validate it.
///
/// # Errors
///
/// - [`ValidationErrorKind::InvalidPayload`] if the body is not JSON
/// - [`ValidationErrorKind::InvalidRequest`] if the JSON violates the schema
///
/// # Examples
///
/// ```
/// use auteur_core::parse_job_request;
/// use auteur_error::ValidationErrorKind;
///
/// let err = parse_job_request(b"{not json").unwrap_err();
/// assert_eq!(err.kind, ValidationErrorKind::InvalidPayload);
/// ```
pub fn parse_job_request(body: &[u8]) -> Result<JobRequest, ValidationError> {
    let payload: JsonValue = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Request body is not valid JSON");
        ValidationError::new(ValidationErrorKind::InvalidPayload)
    })?;
    validate_job_request(&payload)
}

/// Validate an already-parsed payload against the job request schema.
///
/// All field errors are joined with `", "` into a single
/// [`ValidationErrorKind::InvalidRequest`] message.
///
/// # Examples
///
/// ```
/// use auteur_core::validate_job_request;
/// use serde_json::json;
///
/// let err = validate_job_request(&json!({ "script": "too short", "privacyStatus": "friends" }))
///     .unwrap_err();
/// let message = err.client_message();
/// assert!(message.contains("Script must be at least 100 characters"));
/// assert!(message.contains("privacyStatus"));
/// ```
pub fn validate_job_request(payload: &JsonValue) -> Result<JobRequest, ValidationError> {
    let Some(fields) = payload.as_object() else {
        return Err(invalid(vec!["Expected object".to_string()]));
    };

    let mut errors = Vec::new();

    let script = match present(fields, "script") {
        None => {
            errors.push("script: Required".to_string());
            None
        }
        Some(JsonValue::String(script)) => {
            errors.extend(script_violation(script));
            Some(script.clone())
        }
        Some(_) => {
            errors.push("script: Expected string".to_string());
            None
        }
    };

    let voice_id = optional_text(fields, "voiceId", &mut errors);
    let music_prompt = optional_text(fields, "musicPrompt", &mut errors);

    let privacy_status = match present(fields, "privacyStatus") {
        None => PrivacyStatus::default(),
        Some(value) => match value.as_str().map(PrivacyStatus::from_str) {
            Some(Ok(status)) => status,
            _ => {
                errors.push(
                    "privacyStatus: Expected 'public' | 'private' | 'unlisted'".to_string(),
                );
                PrivacyStatus::default()
            }
        },
    };

    match script {
        Some(script) if errors.is_empty() => Ok(JobRequest::from_parts(
            script,
            voice_id,
            music_prompt,
            privacy_status,
        )),
        _ => Err(invalid(errors)),
    }
}

/// Field value, treating `null` as absent.
fn present<'a>(fields: &'a Map<String, JsonValue>, name: &str) -> Option<&'a JsonValue> {
    fields.get(name).filter(|value| !value.is_null())
}

/// Optional text field, trimmed; blank text normalizes to unset.
fn optional_text(
    fields: &Map<String, JsonValue>,
    name: &str,
    errors: &mut Vec<String>,
) -> Option<String> {
    match present(fields, name) {
        None => None,
        Some(JsonValue::String(text)) => normalize_text(text),
        Some(_) => {
            errors.push(format!("{}: Expected string", name));
            None
        }
    }
}

/// Length violation for a script, if any.
pub(crate) fn script_violation(script: &str) -> Option<String> {
    (script.chars().count() < MIN_SCRIPT_CHARS)
        .then(|| format!("Script must be at least {} characters", MIN_SCRIPT_CHARS))
}

/// Trimmed text, or `None` when nothing but whitespace remains.
pub(crate) fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[track_caller]
pub(crate) fn invalid(errors: Vec<String>) -> ValidationError {
    ValidationError::new(ValidationErrorKind::InvalidRequest(errors.join(", ")))
}
