//! Collaborator traits, one per stage.

use async_trait::async_trait;
use auteur_core::{
    MusicTrack, NarrationAudio, PrivacyStatus, PublishedVideo, RenderedVideo, VideoMetadata,
    VisualSequence,
};
use auteur_error::StageError;

/// Result type returned by stage collaborators.
pub type StageResult<T> = Result<T, StageError>;

/// Text-to-speech for the narration track.
#[async_trait]
pub trait NarrationSynthesizer: Send + Sync {
    /// Synthesize the script with the given voice token.
    async fn synthesize(&self, script: &str, voice_id: &str) -> StageResult<NarrationAudio>;
}

/// Finds or generates the visuals shown over the narration.
#[async_trait]
pub trait FootageSource: Send + Sync {
    /// Produce visuals for the script, timed against the narration.
    async fn source(&self, script: &str, narration: &NarrationAudio) -> StageResult<VisualSequence>;
}

/// Generates the background soundtrack.
#[async_trait]
pub trait MusicGenerator: Send + Sync {
    /// Generate a track from a prompt (or a topic derived from the script)
    /// lasting at least `target_seconds`.
    async fn generate(&self, prompt: &str, target_seconds: f64) -> StageResult<MusicTrack>;
}

/// Composites narration, visuals and music into a video.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Render the final video.
    async fn render(
        &self,
        narration: &NarrationAudio,
        visuals: &VisualSequence,
        music: &MusicTrack,
    ) -> StageResult<RenderedVideo>;
}

/// Writes title, description, tags and thumbnail prompt for the video.
#[async_trait]
pub trait MetadataGenerator: Send + Sync {
    /// Generate SEO metadata from the script.
    async fn generate(&self, script: &str) -> StageResult<VideoMetadata>;
}

/// Uploads the rendered video to the hosting platform.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish the video with the given metadata and visibility.
    async fn publish(
        &self,
        video: &RenderedVideo,
        metadata: &VideoMetadata,
        privacy: PrivacyStatus,
    ) -> StageResult<PublishedVideo>;
}
