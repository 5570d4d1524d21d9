//! Pipeline execution logic.
//!
//! This module provides the executor that runs the six production stages
//! in dependency order, recording progress in a per-job execution log.

use crate::aggregate::{StageOutputs, aggregate_success, reported_duration};
use crate::text::first_sentence;
use crate::{AgentExecutionError, ExecutionLog, Studio};
use auteur_core::{JobRequest, JobSuccess, StageName};
use auteur_error::{PipelineError, PipelineErrorKind};
use auteur_interface::StageResult;
use serde_json::{Value as JsonValue, json};
use std::future::Future;
use std::time::Instant;
use tracing::Instrument;

const TOPIC_CHARS: usize = 120;

/// Runs production jobs against a [`Studio`].
///
/// Stages run strictly one after another: narration, footage, music,
/// render, metadata, upload. Each stage gets a start entry and either a
/// completion or a failure entry in the job's [`ExecutionLog`]. The first
/// failure stops the job; no later stage is invoked.
///
/// The executor holds no per-job state and can be shared between
/// concurrent jobs behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct PipelineExecutor {
    studio: Studio,
}

impl PipelineExecutor {
    /// Create an executor driving the given collaborators.
    pub fn new(studio: Studio) -> Self {
        Self { studio }
    }

    /// Get a reference to the collaborators.
    pub fn studio(&self) -> &Studio {
        &self.studio
    }

    /// Run a job with a fresh execution log.
    pub async fn run(&self, request: &JobRequest) -> Result<JobSuccess, AgentExecutionError> {
        self.execute(request, &ExecutionLog::new()).await
    }

    /// Run a job, appending progress to `log`.
    ///
    /// # Errors
    ///
    /// Returns an [`AgentExecutionError`] carrying the log snapshot if any
    /// stage fails or returns unusable output.
    #[tracing::instrument(
        skip(self, request, log),
        fields(script_chars = request.script().chars().count(), privacy = %request.privacy_status())
    )]
    pub async fn execute(
        &self,
        request: &JobRequest,
        log: &ExecutionLog,
    ) -> Result<JobSuccess, AgentExecutionError> {
        match self.run_stages(request, log).await {
            Ok(outputs) => {
                tracing::info!(video_id = %outputs.published.video_id, "Job completed");
                Ok(aggregate_success(outputs, log.snapshot()))
            }
            Err(error) => {
                tracing::warn!(error = %error.kind, "Job failed");
                Err(AgentExecutionError::new(error, log.snapshot()))
            }
        }
    }

    async fn run_stages(
        &self,
        request: &JobRequest,
        log: &ExecutionLog,
    ) -> Result<StageOutputs, PipelineError> {
        let script = request.script().as_str();
        let voice = request.voice();

        let narration = run_stage(
            log,
            StageName::Narration,
            Some(json!({ "voiceId": voice, "scriptChars": script.chars().count() })),
            self.studio.narration.synthesize(script, voice),
            |audio| {
                if audio.duration_seconds.is_finite() && audio.duration_seconds > 0.0 {
                    Ok(json!({
                        "durationSeconds": audio.duration_seconds,
                        "wordCount": audio.word_count,
                    }))
                } else {
                    Err(format!("narration lasts {} seconds", audio.duration_seconds))
                }
            },
        )
        .await?;

        let visuals = run_stage(
            log,
            StageName::Footage,
            None,
            self.studio.footage.source(script, &narration),
            |visuals| {
                if visuals.is_empty() {
                    Err("no visuals were produced".to_string())
                } else {
                    Ok(json!({
                        "clipCount": visuals.len(),
                        "queries": visuals.assets().iter().map(|asset| asset.query.as_str()).collect::<Vec<_>>(),
                    }))
                }
            },
        )
        .await?;

        let (music_prompt, derived) = match request.music_prompt() {
            Some(prompt) => (prompt.clone(), false),
            None => (
                format!("Background score for a video about: {}", first_sentence(script, TOPIC_CHARS)),
                true,
            ),
        };
        let music = run_stage(
            log,
            StageName::Music,
            Some(json!({ "prompt": music_prompt, "derivedFromScript": derived })),
            self.studio.music.generate(&music_prompt, narration.duration_seconds),
            |track| {
                Ok(json!({
                    "mood": track.mood,
                    "durationSeconds": track.duration_seconds,
                }))
            },
        )
        .await?;

        let video = run_stage(
            log,
            StageName::Render,
            Some(json!({ "sceneCount": visuals.len() })),
            self.studio.renderer.render(&narration, &visuals, &music),
            |video| {
                if video.duration_seconds.is_finite() && reported_duration(video.duration_seconds) > 0.0 {
                    Ok(json!({
                        "durationSeconds": video.duration_seconds,
                        "resolution": video.resolution,
                    }))
                } else {
                    Err(format!("rendered video lasts {} seconds", video.duration_seconds))
                }
            },
        )
        .await?;

        let metadata = run_stage(
            log,
            StageName::Metadata,
            None,
            self.studio.metadata.generate(script),
            |metadata| {
                if metadata.title().trim().is_empty() {
                    Err("generated title is empty".to_string())
                } else {
                    Ok(json!({ "title": metadata.title(), "tags": metadata.tags() }))
                }
            },
        )
        .await?;

        let privacy = *request.privacy_status();
        let published = run_stage(
            log,
            StageName::Upload,
            Some(json!({ "privacyStatus": privacy })),
            self.studio.publisher.publish(&video, &metadata, privacy),
            |published| {
                if published.video_id.is_empty() || published.video_url.is_empty() {
                    Err("upload returned no video location".to_string())
                } else {
                    Ok(json!({ "videoId": published.video_id, "videoUrl": published.video_url }))
                }
            },
        )
        .await?;

        Ok(StageOutputs {
            narration,
            visuals,
            music,
            video,
            metadata,
            published,
        })
    }
}

/// Run one stage: log its start, await the work, then log completion or failure.
///
/// `inspect` summarizes a successful output for the completion entry, or
/// rejects output the downstream stages cannot use.
async fn run_stage<T, F, I>(
    log: &ExecutionLog,
    stage: StageName,
    start_data: Option<JsonValue>,
    work: F,
    inspect: I,
) -> Result<T, PipelineError>
where
    F: Future<Output = StageResult<T>>,
    I: FnOnce(&T) -> Result<JsonValue, String>,
{
    log.append(stage, stage.activity(), start_data);
    let started = Instant::now();

    let result = work.instrument(tracing::info_span!("stage", stage = %stage)).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    let output = match result {
        Ok(output) => output,
        Err(e) => {
            tracing::error!(stage = %stage, error = %e, elapsed_ms, "Stage failed");
            log.append(
                stage,
                format!("{} failed: {}", stage.activity(), e.message),
                Some(json!({ "error": e.message, "elapsedMs": elapsed_ms })),
            );
            return Err(PipelineError::new(PipelineErrorKind::StageFailed {
                stage: stage.to_string(),
                message: e.message,
            }));
        }
    };

    match inspect(&output) {
        Ok(mut data) => {
            if let Some(fields) = data.as_object_mut() {
                fields.insert("elapsedMs".to_string(), json!(elapsed_ms));
            }
            tracing::info!(stage = %stage, elapsed_ms, "Stage completed");
            log.append(stage, stage.completion(), Some(data));
            Ok(output)
        }
        Err(message) => {
            tracing::error!(stage = %stage, reason = %message, "Stage produced invalid output");
            log.append(
                stage,
                format!("{} produced invalid output: {}", stage.activity(), message),
                Some(json!({ "error": message, "elapsedMs": elapsed_ms })),
            );
            Err(PipelineError::new(PipelineErrorKind::InvalidOutput {
                stage: stage.to_string(),
                message,
            }))
        }
    }
}
