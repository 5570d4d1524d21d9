use crate::text::{first_sentence, keywords, sentences};
use async_trait::async_trait;
use auteur_core::VideoMetadata;
use auteur_error::StageError;
use auteur_interface::{MetadataGenerator, StageResult};

const TITLE_CHARS: usize = 100;
const DESCRIPTION_CHARS: usize = 5000;
const FALLBACK_TAG: &str = "video";

/// Derives title, description and tags from the script's own vocabulary.
#[derive(Debug, Clone)]
pub struct LocalMetadataGenerator {
    max_tags: usize,
}

impl LocalMetadataGenerator {
    /// Generator emitting at most `max_tags` tags.
    pub fn new(max_tags: usize) -> Self {
        Self { max_tags }
    }

    fn description(script: &str, tags: &[String]) -> String {
        let hashtags = tags
            .iter()
            .take(3)
            .map(|tag| format!("#{}", tag.replace([' ', '-', '\''], "")))
            .collect::<Vec<_>>()
            .join(" ");
        // Leave room for the blank line and the hashtags.
        let budget = DESCRIPTION_CHARS.saturating_sub(hashtags.chars().count() + 2);

        let mut body = String::new();
        for sentence in sentences(script) {
            let extra = sentence.chars().count() + usize::from(!body.is_empty());
            if body.chars().count() + extra > budget {
                break;
            }
            if !body.is_empty() {
                body.push(' ');
            }
            body.push_str(&sentence);
        }

        if hashtags.is_empty() {
            body
        } else {
            format!("{}\n\n{}", body, hashtags)
        }
    }
}

impl Default for LocalMetadataGenerator {
    fn default() -> Self {
        Self::new(15)
    }
}

#[async_trait]
impl MetadataGenerator for LocalMetadataGenerator {
    async fn generate(&self, script: &str) -> StageResult<VideoMetadata> {
        let title = first_sentence(script, TITLE_CHARS);
        if title.is_empty() {
            return Err(StageError::new("Script has no sentence to title the video with"));
        }

        let mut tags = keywords(script, self.max_tags.max(1));
        if tags.is_empty() {
            tags.push(FALLBACK_TAG.to_string());
        }

        let thumbnail_prompt = format!(
            "Eye-catching YouTube thumbnail for \"{}\" featuring {}, bold headline text, high contrast",
            title,
            tags.iter().take(3).cloned().collect::<Vec<_>>().join(", ")
        );

        Ok(VideoMetadata::new(
            title,
            Self::description(script, &tags),
            tags,
            thumbnail_prompt,
        ))
    }
}
