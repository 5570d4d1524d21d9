use crate::text::words;
use async_trait::async_trait;
use auteur_core::NarrationAudio;
use auteur_error::StageError;
use auteur_interface::{NarrationSynthesizer, StageResult};

/// Average speaking rate used to estimate narration length.
pub const DEFAULT_WORDS_PER_MINUTE: f64 = 150.0;

/// Estimates narration length from the word count instead of synthesizing audio.
#[derive(Debug, Clone)]
pub struct LocalNarrationSynthesizer {
    words_per_minute: f64,
}

impl LocalNarrationSynthesizer {
    /// Synthesizer speaking at the given rate.
    pub fn new(words_per_minute: f64) -> Self {
        Self { words_per_minute }
    }
}

impl Default for LocalNarrationSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS_PER_MINUTE)
    }
}

#[async_trait]
impl NarrationSynthesizer for LocalNarrationSynthesizer {
    async fn synthesize(&self, script: &str, voice_id: &str) -> StageResult<NarrationAudio> {
        if voice_id.is_empty() || voice_id.chars().any(char::is_whitespace) {
            return Err(StageError::new(format!("Invalid voice token '{}'", voice_id)));
        }
        if self.words_per_minute.is_nan() || self.words_per_minute <= 0.0 {
            return Err(StageError::new("Speaking rate must be positive"));
        }

        let word_count = words(script).len();
        if word_count == 0 {
            return Err(StageError::new("Script contains no speakable words"));
        }

        let seconds = (word_count as f64 / self.words_per_minute * 60.0).max(1.0);
        tracing::debug!(word_count, seconds, voice = voice_id, "Estimated narration length");

        Ok(NarrationAudio {
            voice_id: voice_id.to_string(),
            duration_seconds: (seconds * 100.0).round() / 100.0,
            word_count,
            location: format!("memory://narration/{}.mp3", voice_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duration_follows_word_count() {
        let script = "word ".repeat(300);
        let audio = LocalNarrationSynthesizer::default()
            .synthesize(&script, "alloy")
            .await
            .unwrap();
        assert_eq!(audio.word_count, 300);
        assert_eq!(audio.duration_seconds, 120.0);
        assert_eq!(audio.location, "memory://narration/alloy.mp3");
    }

    #[tokio::test]
    async fn short_scripts_last_at_least_a_second() {
        let audio = LocalNarrationSynthesizer::default()
            .synthesize("Hi", "alloy")
            .await
            .unwrap();
        assert_eq!(audio.duration_seconds, 1.0);
    }

    #[tokio::test]
    async fn rejects_malformed_voice() {
        let result = LocalNarrationSynthesizer::default()
            .synthesize("Hello world", "two words")
            .await;
        assert!(result.is_err());
    }
}
