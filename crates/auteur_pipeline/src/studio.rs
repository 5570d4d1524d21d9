//! The bundle of collaborators an executor drives.

use crate::local::{
    LocalFootageSource, LocalMetadataGenerator, LocalMusicGenerator, LocalNarrationSynthesizer,
    LocalPublisher, LocalRenderer,
};
use auteur_interface::{
    FootageSource, MetadataGenerator, MusicGenerator, NarrationSynthesizer, Publisher, Renderer,
};
use std::sync::Arc;

/// One collaborator per stage.
///
/// Collaborators are shared immutably between concurrent jobs, so
/// implementations must not keep per-job state.
///
/// # Example
///
/// ```rust,ignore
/// use auteur_pipeline::Studio;
/// use std::sync::Arc;
///
/// // Everything local except the uploader.
/// let studio = Studio::local().with_publisher(Arc::new(MyChannelUploader::new(token)));
/// ```
#[derive(Clone)]
pub struct Studio {
    pub(crate) narration: Arc<dyn NarrationSynthesizer>,
    pub(crate) footage: Arc<dyn FootageSource>,
    pub(crate) music: Arc<dyn MusicGenerator>,
    pub(crate) renderer: Arc<dyn Renderer>,
    pub(crate) metadata: Arc<dyn MetadataGenerator>,
    pub(crate) publisher: Arc<dyn Publisher>,
}

impl Studio {
    /// Assemble a studio from explicit collaborators.
    pub fn new(
        narration: Arc<dyn NarrationSynthesizer>,
        footage: Arc<dyn FootageSource>,
        music: Arc<dyn MusicGenerator>,
        renderer: Arc<dyn Renderer>,
        metadata: Arc<dyn MetadataGenerator>,
        publisher: Arc<dyn Publisher>,
    ) -> Self {
        Self {
            narration,
            footage,
            music,
            renderer,
            metadata,
            publisher,
        }
    }

    /// Studio backed entirely by the deterministic local collaborators.
    pub fn local() -> Self {
        Self::new(
            Arc::new(LocalNarrationSynthesizer::default()),
            Arc::new(LocalFootageSource::default()),
            Arc::new(LocalMusicGenerator),
            Arc::new(LocalRenderer::default()),
            Arc::new(LocalMetadataGenerator::default()),
            Arc::new(LocalPublisher),
        )
    }

    /// Replace the narration synthesizer.
    pub fn with_narration(mut self, narration: Arc<dyn NarrationSynthesizer>) -> Self {
        self.narration = narration;
        self
    }

    /// Replace the footage source.
    pub fn with_footage(mut self, footage: Arc<dyn FootageSource>) -> Self {
        self.footage = footage;
        self
    }

    /// Replace the music generator.
    pub fn with_music(mut self, music: Arc<dyn MusicGenerator>) -> Self {
        self.music = music;
        self
    }

    /// Replace the renderer.
    pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Replace the metadata generator.
    pub fn with_metadata(mut self, metadata: Arc<dyn MetadataGenerator>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Replace the publisher.
    pub fn with_publisher(mut self, publisher: Arc<dyn Publisher>) -> Self {
        self.publisher = publisher;
        self
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::local()
    }
}

impl std::fmt::Debug for Studio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Studio").finish_non_exhaustive()
    }
}
