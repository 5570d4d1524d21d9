//! Core data types for the Auteur video automation service.
//!
//! This crate provides the job request schema and its validator, the
//! execution log entry, the artifacts passed between pipeline stages and the
//! job outcome envelope returned to callers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
mod log_entry;
mod metadata;
mod outcome;
mod privacy;
mod request;
mod stage;
mod validation;

pub use artifact::{MusicTrack, NarrationAudio, PublishedVideo, RenderedVideo, VisualAsset, VisualSequence};
pub use log_entry::LogEntry;
pub use metadata::VideoMetadata;
pub use outcome::{JobFailure, JobOutcome, JobSuccess};
pub use privacy::PrivacyStatus;
pub use request::{DEFAULT_VOICE_ID, JobRequest, JobRequestBuilder};
pub use stage::StageName;
pub use validation::{MIN_SCRIPT_CHARS, parse_job_request, validate_job_request};
