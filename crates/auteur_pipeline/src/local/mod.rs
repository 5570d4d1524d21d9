//! Deterministic, in-process collaborators.
//!
//! These stand in for real providers (TTS, stock footage, music models,
//! encoders, upload APIs) so a job can run end to end without network
//! access. Artifact locations use the `memory://` scheme.

mod footage;
mod metadata;
mod music;
mod narration;
mod render;
mod upload;

pub use footage::LocalFootageSource;
pub use metadata::LocalMetadataGenerator;
pub use music::LocalMusicGenerator;
pub use narration::LocalNarrationSynthesizer;
pub use render::LocalRenderer;
pub use upload::LocalPublisher;
