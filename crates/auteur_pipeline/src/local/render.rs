use async_trait::async_trait;
use auteur_core::{MusicTrack, NarrationAudio, RenderedVideo, VisualSequence};
use auteur_error::StageError;
use auteur_interface::{Renderer, StageResult};

/// Frame size used when none is configured.
pub const DEFAULT_RESOLUTION: &str = "1920x1080";

/// Computes the composite's length and layout without encoding anything.
#[derive(Debug, Clone)]
pub struct LocalRenderer {
    resolution: String,
}

impl LocalRenderer {
    /// Renderer producing the given frame size.
    pub fn new(resolution: impl Into<String>) -> Self {
        Self {
            resolution: resolution.into(),
        }
    }
}

impl Default for LocalRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLUTION)
    }
}

#[async_trait]
impl Renderer for LocalRenderer {
    async fn render(
        &self,
        narration: &NarrationAudio,
        visuals: &VisualSequence,
        music: &MusicTrack,
    ) -> StageResult<RenderedVideo> {
        if visuals.is_empty() {
            return Err(StageError::new("No visuals to render"));
        }

        let duration_seconds = narration.duration_seconds.max(visuals.total_duration());
        if music.duration_seconds < duration_seconds {
            tracing::debug!(
                music = music.duration_seconds,
                video = duration_seconds,
                "Music track shorter than video, looping"
            );
        }

        Ok(RenderedVideo {
            location: format!("memory://render/{}.mp4", uuid::Uuid::new_v4().simple()),
            duration_seconds,
            resolution: self.resolution.clone(),
            scene_count: visuals.len(),
        })
    }
}
