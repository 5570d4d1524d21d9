//! Assembles job results from stage outputs.

use crate::AgentExecutionError;
use auteur_core::{
    JobFailure, JobSuccess, LogEntry, MusicTrack, NarrationAudio, PublishedVideo, RenderedVideo,
    VideoMetadata, VisualSequence,
};

/// Terminal outputs of every stage of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct StageOutputs {
    /// Narration stage output
    pub narration: NarrationAudio,
    /// Footage stage output
    pub visuals: VisualSequence,
    /// Music stage output
    pub music: MusicTrack,
    /// Render stage output
    pub video: RenderedVideo,
    /// Metadata stage output
    pub metadata: VideoMetadata,
    /// Upload stage output
    pub published: PublishedVideo,
}

/// Build the success result from the stage outputs and the complete log.
///
/// The reported duration is the rendered video's, rounded to one decimal.
pub fn aggregate_success(outputs: StageOutputs, logs: Vec<LogEntry>) -> JobSuccess {
    let StageOutputs {
        video,
        metadata,
        published,
        ..
    } = outputs;
    let duration_seconds = reported_duration(video.duration_seconds);

    JobSuccess::new(
        published.video_url,
        published.video_id,
        duration_seconds,
        metadata,
        logs,
    )
}

/// Duration as reported to callers: rounded to one decimal.
pub(crate) fn reported_duration(seconds: f64) -> f64 {
    (seconds * 10.0).round() / 10.0
}

/// Build the failure result for a failed run, keeping its log trail.
pub fn aggregate_failure(error: AgentExecutionError) -> JobFailure {
    error.into_failure()
}
