use crate::text::{keywords, sentences, truncate_words, words};
use async_trait::async_trait;
use auteur_core::{NarrationAudio, VisualAsset, VisualSequence};
use auteur_error::StageError;
use auteur_interface::{FootageSource, StageResult};

const CAPTION_CHARS: usize = 120;
const FALLBACK_QUERY: &str = "abstract background";

/// One clip per sentence, timed in proportion to the sentence's word count.
#[derive(Debug, Clone)]
pub struct LocalFootageSource {
    query_terms: usize,
}

impl LocalFootageSource {
    /// Source whose search queries use up to `query_terms` keywords.
    pub fn new(query_terms: usize) -> Self {
        Self { query_terms }
    }
}

impl Default for LocalFootageSource {
    fn default() -> Self {
        Self::new(3)
    }
}

#[async_trait]
impl FootageSource for LocalFootageSource {
    async fn source(&self, script: &str, narration: &NarrationAudio) -> StageResult<VisualSequence> {
        let scenes: Vec<(String, usize)> = sentences(script)
            .into_iter()
            .map(|sentence| {
                let count = words(&sentence).len();
                (sentence, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect();

        let total_words: usize = scenes.iter().map(|(_, count)| count).sum();
        if total_words == 0 {
            return Err(StageError::new("Script has no sentences to illustrate"));
        }

        let assets = scenes
            .into_iter()
            .enumerate()
            .map(|(index, (sentence, count))| {
                let terms = keywords(&sentence, self.query_terms);
                let query = if terms.is_empty() {
                    FALLBACK_QUERY.to_string()
                } else {
                    terms.join(" ")
                };
                VisualAsset {
                    index,
                    caption: truncate_words(&sentence, CAPTION_CHARS),
                    query,
                    duration_seconds: narration.duration_seconds * count as f64 / total_words as f64,
                    location: format!("memory://footage/{:03}.mp4", index),
                }
            })
            .collect();

        Ok(VisualSequence::new(assets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narration(seconds: f64) -> NarrationAudio {
        NarrationAudio {
            voice_id: "alloy".into(),
            duration_seconds: seconds,
            word_count: 0,
            location: "memory://narration/alloy.mp3".into(),
        }
    }

    #[tokio::test]
    async fn clips_cover_the_narration() {
        let visuals = LocalFootageSource::default()
            .source("Volcanoes erupt violently. Lava flows slowly downhill toward villages.", &narration(30.0))
            .await
            .unwrap();

        assert_eq!(visuals.len(), 2);
        assert!((visuals.total_duration() - 30.0).abs() < 1e-9);
        assert_eq!(visuals.assets()[0].query, "volcanoes erupt violently");
        assert!(visuals.assets()[1].duration_seconds > visuals.assets()[0].duration_seconds);
    }

    #[tokio::test]
    async fn empty_script_fails() {
        let result = LocalFootageSource::default().source("?!", &narration(5.0)).await;
        assert!(result.is_err());
    }
}
