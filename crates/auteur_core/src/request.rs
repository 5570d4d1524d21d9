//! Validated job requests.

use crate::PrivacyStatus;
use crate::validation::{invalid, normalize_text, script_violation};
use auteur_error::ValidationError;
use serde::Serialize;

/// Voice used when a request does not name one.
pub const DEFAULT_VOICE_ID: &str = "alloy";

/// A normalized, validated request to produce and publish one video.
///
/// Instances are produced by [`validate_job_request`](crate::validate_job_request)
/// or the builder, which apply the same rules, and are immutable afterwards. Optional text fields are
/// `None` when unset, never empty strings.
///
/// # Examples
///
/// ```
/// use auteur_core::{JobRequest, PrivacyStatus};
///
/// let script = "Once upon a time, a lighthouse keeper kept a log of every ship. ".repeat(2);
/// let request = JobRequest::builder()
///     .script(script)
///     .voice_id(" nova ")
///     .music_prompt("   ")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.voice(), "nova");
/// assert!(request.music_prompt().is_none());
/// assert_eq!(*request.privacy_status(), PrivacyStatus::Private);
///
/// assert!(JobRequest::builder().script("Once upon a time").build().is_err());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters, derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(pattern = "owned", build_fn(private, name = "build_unchecked"))]
pub struct JobRequest {
    /// Narration script
    #[builder(setter(into))]
    script: String,
    /// Text-to-speech voice token
    #[builder(default, setter(into, strip_option))]
    voice_id: Option<String>,
    /// Prompt steering the generated soundtrack
    #[builder(default, setter(into, strip_option))]
    music_prompt: Option<String>,
    /// Visibility of the published video
    #[builder(default)]
    privacy_status: PrivacyStatus,
}

impl JobRequest {
    /// Creates a new job request builder.
    pub fn builder() -> JobRequestBuilder {
        JobRequestBuilder::default()
    }

    /// Assemble an already-validated request.
    pub(crate) fn from_parts(
        script: String,
        voice_id: Option<String>,
        music_prompt: Option<String>,
        privacy_status: PrivacyStatus,
    ) -> Self {
        Self {
            script,
            voice_id,
            music_prompt,
            privacy_status,
        }
    }

    /// Voice token to synthesize with, falling back to [`DEFAULT_VOICE_ID`].
    pub fn voice(&self) -> &str {
        self.voice_id.as_deref().unwrap_or(DEFAULT_VOICE_ID)
    }
}

impl JobRequestBuilder {
    /// Build the request, enforcing the script length and normalizing the
    /// optional text fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrorKind::InvalidRequest`](auteur_error::ValidationErrorKind::InvalidRequest)
    /// if the script is missing or too short.
    #[track_caller]
    pub fn build(self) -> Result<JobRequest, ValidationError> {
        let request = self.build_unchecked().map_err(|e| match e {
            JobRequestBuilderError::UninitializedField(field) => {
                invalid(vec![format!("{}: Required", field)])
            }
            JobRequestBuilderError::ValidationError(message) => invalid(vec![message]),
        })?;

        if let Some(violation) = script_violation(&request.script) {
            return Err(invalid(vec![violation]));
        }

        Ok(JobRequest {
            voice_id: request.voice_id.as_deref().and_then(normalize_text),
            music_prompt: request.music_prompt.as_deref().and_then(normalize_text),
            ..request
        })
    }
}
