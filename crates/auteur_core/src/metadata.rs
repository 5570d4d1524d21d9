//! Generated SEO metadata.

use serde::{Deserialize, Serialize};

/// Title, description, tags and thumbnail prompt for a published video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    /// Video title
    title: String,
    /// Video description
    description: String,
    /// Search tags, lowercase and unique
    tags: Vec<String>,
    /// Prompt for generating the thumbnail image
    thumbnail_prompt: String,
}

impl VideoMetadata {
    /// Create metadata, dropping blank and duplicate tags while keeping first-seen order.
    ///
    /// # Examples
    ///
    /// ```
    /// use auteur_core::VideoMetadata;
    ///
    /// let metadata = VideoMetadata::new(
    ///     "Five AI tools",
    ///     "A tour of five tools.",
    ///     vec!["ai".into(), "AI".into(), " ".into(), "tools".into()],
    ///     "Neon collage of five app icons",
    /// );
    /// assert_eq!(metadata.tags(), &vec!["ai".to_string(), "tools".to_string()]);
    /// ```
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
        thumbnail_prompt: impl Into<String>,
    ) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(tags.len());
        for tag in tags {
            let tag = tag.trim().to_lowercase();
            if !tag.is_empty() && !unique.contains(&tag) {
                unique.push(tag);
            }
        }
        Self {
            title: title.into(),
            description: description.into(),
            tags: unique,
            thumbnail_prompt: thumbnail_prompt.into(),
        }
    }
}
