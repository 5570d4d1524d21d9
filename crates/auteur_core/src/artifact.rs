//! Artifacts handed from one pipeline stage to the next.

use crate::PrivacyStatus;
use serde::{Deserialize, Serialize};

/// Synthesized narration track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrationAudio {
    /// Voice token used for synthesis
    pub voice_id: String,
    /// Length of the narration in seconds
    pub duration_seconds: f64,
    /// Number of words narrated
    pub word_count: usize,
    /// Where the audio was written
    pub location: String,
}

/// One visual clip covering part of the narration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualAsset {
    /// Position in the sequence (0-indexed)
    pub index: usize,
    /// Narration text the clip illustrates
    pub caption: String,
    /// Search query used to find the clip
    pub query: String,
    /// Screen time in seconds
    pub duration_seconds: f64,
    /// Where the clip was stored
    pub location: String,
}

/// Ordered visuals for a job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VisualSequence(Vec<VisualAsset>);

impl VisualSequence {
    /// Wrap assets, keeping their order.
    pub fn new(assets: Vec<VisualAsset>) -> Self {
        Self(assets)
    }

    /// Assets in playback order.
    pub fn assets(&self) -> &[VisualAsset] {
        &self.0
    }

    /// Number of assets.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no assets.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of the asset durations in seconds.
    pub fn total_duration(&self) -> f64 {
        self.0.iter().map(|asset| asset.duration_seconds).sum()
    }
}

/// Generated background music.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicTrack {
    /// Prompt the track was generated from
    pub prompt: String,
    /// Mood label
    pub mood: String,
    /// Length in seconds
    pub duration_seconds: f64,
    /// Where the track was written
    pub location: String,
}

/// Final rendered video file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedVideo {
    /// Where the video was written
    pub location: String,
    /// Length in seconds
    pub duration_seconds: f64,
    /// Frame size, e.g. `1920x1080`
    pub resolution: String,
    /// Number of visual scenes composited
    pub scene_count: usize,
}

/// A video after upload to the hosting platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedVideo {
    /// Platform video identifier
    pub video_id: String,
    /// Public watch URL
    pub video_url: String,
    /// Visibility the video was published with
    pub privacy_status: PrivacyStatus,
}
