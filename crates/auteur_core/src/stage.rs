//! Pipeline stage identifiers.

use serde::{Deserialize, Serialize};

/// The six stages of a production job, declared in execution order.
///
/// Each stage may depend on the outputs of the stages before it, so the
/// declaration order is also the only valid execution order.
///
/// # Examples
///
/// ```
/// use auteur_core::StageName;
///
/// assert_eq!(StageName::Render.to_string(), "render");
/// assert_eq!(StageName::ORDER.first(), Some(&StageName::Narration));
/// assert!(StageName::Metadata.position() < StageName::Upload.position());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StageName {
    /// Text-to-speech narration synthesis
    Narration,
    /// Visual footage sourcing
    Footage,
    /// Background music generation
    Music,
    /// Video rendering from narration, visuals and music
    Render,
    /// SEO metadata generation
    Metadata,
    /// Platform upload
    Upload,
}

impl StageName {
    /// All stages in execution order.
    pub const ORDER: [StageName; 6] = [
        StageName::Narration,
        StageName::Footage,
        StageName::Music,
        StageName::Render,
        StageName::Metadata,
        StageName::Upload,
    ];

    /// Name as it appears in log entries and errors.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Zero-based position in the pipeline.
    pub fn position(self) -> usize {
        self as usize
    }

    /// Human-readable activity shown in log messages.
    pub fn activity(self) -> &'static str {
        match self {
            StageName::Narration => "Synthesizing narration",
            StageName::Footage => "Sourcing footage",
            StageName::Music => "Generating music",
            StageName::Render => "Rendering video",
            StageName::Metadata => "Generating metadata",
            StageName::Upload => "Uploading video",
        }
    }

    /// Message logged when the stage finishes successfully.
    pub fn completion(self) -> &'static str {
        match self {
            StageName::Narration => "Narration ready",
            StageName::Footage => "Footage sourced",
            StageName::Music => "Music track ready",
            StageName::Render => "Video rendered",
            StageName::Metadata => "Metadata generated",
            StageName::Upload => "Video published",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn wire_names_agree_with_display_and_serde() {
        for stage in StageName::iter() {
            assert_eq!(stage.as_str(), stage.to_string());
            assert_eq!(serde_json::to_value(stage).unwrap(), stage.as_str());
        }
        assert_eq!(StageName::Upload.as_str(), "upload");
    }

    #[test]
    fn order_matches_declaration() {
        let positions: Vec<usize> = StageName::ORDER.iter().map(|stage| stage.position()).collect();
        assert_eq!(positions, (0..6).collect::<Vec<_>>());
    }
}
