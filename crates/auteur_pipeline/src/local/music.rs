use async_trait::async_trait;
use auteur_core::MusicTrack;
use auteur_error::StageError;
use auteur_interface::{MusicGenerator, StageResult};

const MOODS: &[(&str, &[&str])] = &[
    ("ambient", &["ambient", "calm", "dreamy", "relax", "chill", "soft", "peaceful"]),
    ("cinematic", &["cinematic", "epic", "dramatic", "orchestral", "trailer"]),
    ("upbeat", &["upbeat", "energetic", "fun", "dance", "happy", "pop"]),
    ("suspense", &["dark", "mysterious", "tense", "horror", "suspense"]),
];
const DEFAULT_MOOD: &str = "inspirational";

/// Picks a mood from the prompt's vocabulary and sizes the track to the target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalMusicGenerator;

impl LocalMusicGenerator {
    fn mood(prompt: &str) -> &'static str {
        let prompt = prompt.to_lowercase();
        MOODS
            .iter()
            .find(|(_, cues)| cues.iter().any(|cue| prompt.contains(cue)))
            .map(|(mood, _)| *mood)
            .unwrap_or(DEFAULT_MOOD)
    }
}

#[async_trait]
impl MusicGenerator for LocalMusicGenerator {
    async fn generate(&self, prompt: &str, target_seconds: f64) -> StageResult<MusicTrack> {
        if prompt.trim().is_empty() {
            return Err(StageError::new("Music prompt is empty"));
        }
        if !target_seconds.is_finite() || target_seconds <= 0.0 {
            return Err(StageError::new(format!(
                "Cannot generate a track lasting {} seconds",
                target_seconds
            )));
        }

        let mood = Self::mood(prompt);
        Ok(MusicTrack {
            prompt: prompt.to_string(),
            mood: mood.to_string(),
            duration_seconds: target_seconds,
            location: format!("memory://music/{}.mp3", mood),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mood_follows_prompt() {
        let track = LocalMusicGenerator
            .generate("Dreamy ambient electronic atmosphere", 42.0)
            .await
            .unwrap();
        assert_eq!(track.mood, "ambient");
        assert_eq!(track.duration_seconds, 42.0);
    }

    #[tokio::test]
    async fn unknown_vocabulary_uses_default_mood() {
        let track = LocalMusicGenerator.generate("kazoo solo", 3.0).await.unwrap();
        assert_eq!(track.mood, DEFAULT_MOOD);
    }

    #[tokio::test]
    async fn rejects_non_positive_length() {
        assert!(LocalMusicGenerator.generate("epic", 0.0).await.is_err());
    }
}
