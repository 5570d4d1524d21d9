use async_trait::async_trait;
use auteur_core::{PrivacyStatus, PublishedVideo, RenderedVideo, VideoMetadata};
use auteur_error::StageError;
use auteur_interface::{Publisher, StageResult};

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";
const VIDEO_ID_CHARS: usize = 11;

/// Assigns a platform-shaped video id and watch URL without uploading.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPublisher;

#[async_trait]
impl Publisher for LocalPublisher {
    async fn publish(
        &self,
        video: &RenderedVideo,
        metadata: &VideoMetadata,
        privacy: PrivacyStatus,
    ) -> StageResult<PublishedVideo> {
        if metadata.title().trim().is_empty() {
            return Err(StageError::new("Refusing to publish a video without a title"));
        }
        if video.duration_seconds <= 0.0 {
            return Err(StageError::new("Refusing to publish an empty video"));
        }

        let video_id: String = uuid::Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(VIDEO_ID_CHARS)
            .collect();
        tracing::info!(video_id = %video_id, privacy = %privacy, source = %video.location, "Published video");

        Ok(PublishedVideo {
            video_url: format!("{}{}", WATCH_URL, video_id),
            video_id,
            privacy_status: privacy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn assigns_watch_url() {
        let video = RenderedVideo {
            location: "memory://render/x.mp4".into(),
            duration_seconds: 9.0,
            resolution: "1920x1080".into(),
            scene_count: 2,
        };
        let metadata = VideoMetadata::new("Title", "Body", vec!["tag".into()], "thumb");
        let published = LocalPublisher
            .publish(&video, &metadata, PrivacyStatus::Unlisted)
            .await
            .unwrap();

        assert_eq!(published.video_id.len(), VIDEO_ID_CHARS);
        assert!(published.video_url.ends_with(&published.video_id));
        assert_eq!(published.privacy_status, PrivacyStatus::Unlisted);
    }
}
