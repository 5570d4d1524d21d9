//! End-to-end tests for the job endpoint.

use async_trait::async_trait;
use auteur_core::{MusicTrack, NarrationAudio, RenderedVideo, VisualSequence};
use auteur_interface::{NarrationSynthesizer, Renderer, StageResult};
use auteur_pipeline::local::LocalNarrationSynthesizer;
use auteur_pipeline::{PipelineExecutor, Studio};
use auteur_server::{AppState, create_router};
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tower::ServiceExt;

fn narration_script() -> String {
    "Solar power is reshaping how cities plan their energy future. Rooftop panels now feed \
     entire neighborhoods, while batteries store the surplus for the evening peak. "
        .repeat(3)
        .chars()
        .take(320)
        .collect()
}

/// Narration double that counts invocations.
#[derive(Default)]
struct CountingNarration {
    calls: AtomicUsize,
}

#[async_trait]
impl NarrationSynthesizer for CountingNarration {
    async fn synthesize(&self, script: &str, voice_id: &str) -> StageResult<NarrationAudio> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        LocalNarrationSynthesizer::default().synthesize(script, voice_id).await
    }
}

/// Renderer that never finishes within any reasonable ceiling.
struct StalledRenderer;

#[async_trait]
impl Renderer for StalledRenderer {
    async fn render(
        &self,
        _narration: &NarrationAudio,
        _visuals: &VisualSequence,
        _music: &MusicTrack,
    ) -> StageResult<RenderedVideo> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        unreachable!("the job ceiling aborts the render first")
    }
}

/// Renderer that panics with a message.
struct PanickingRenderer;

#[async_trait]
impl Renderer for PanickingRenderer {
    async fn render(
        &self,
        _narration: &NarrationAudio,
        _visuals: &VisualSequence,
        _music: &MusicTrack,
    ) -> StageResult<RenderedVideo> {
        panic!("encoder segfault");
    }
}

fn router_with(studio: Studio, ceiling: Duration) -> axum::Router {
    create_router(AppState::new(PipelineExecutor::new(studio), ceiling))
}

fn local_router() -> axum::Router {
    router_with(Studio::local(), Duration::from_secs(300))
}

async fn post_job(router: axum::Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/agent")
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = local_router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_json_is_rejected_before_any_stage() {
    let narration = Arc::new(CountingNarration::default());
    let router = router_with(
        Studio::local().with_narration(narration.clone()),
        Duration::from_secs(300),
    );

    let (status, body) = post_job(router, "{\"script\": ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "ok": false, "error": "Invalid JSON payload" }));
    assert_eq!(narration.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_short_script_is_rejected() {
    let narration = Arc::new(CountingNarration::default());
    let router = router_with(
        Studio::local().with_narration(narration.clone()),
        Duration::from_secs(300),
    );

    let (status, body) = post_job(router, json!({ "script": "too short" }).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], false);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("Script must be at least 100 characters")
    );
    assert!(body.get("logs").is_none());
    assert_eq!(narration.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_every_field_error_is_reported() {
    let (status, body) = post_job(
        local_router(),
        json!({ "script": "too short", "voiceId": 5, "privacyStatus": "everyone" }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Script must be at least 100 characters, voiceId: Expected string, \
         privacyStatus: Expected 'public' | 'private' | 'unlisted'"
    );
}

#[tokio::test]
async fn test_successful_job_returns_published_video() {
    let script = narration_script();
    assert_eq!(script.chars().count(), 320);

    let (status, body) = post_job(
        local_router(),
        json!({ "script": script, "voiceId": "alloy", "privacyStatus": "unlisted" }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert!(body["videoUrl"].as_str().unwrap().starts_with("https://"));
    assert!(!body["videoId"].as_str().unwrap().is_empty());
    assert!(body["durationSeconds"].as_f64().unwrap() > 0.0);

    let metadata = &body["metadata"];
    assert!(!metadata["title"].as_str().unwrap().is_empty());
    assert!(!metadata["description"].as_str().unwrap().is_empty());
    assert!(!metadata["thumbnailPrompt"].as_str().unwrap().is_empty());
    let tags = metadata["tags"].as_array().unwrap();
    assert!(!tags.is_empty());
    assert!(tags.iter().all(Value::is_string));

    let logs = body["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 12);
    assert_eq!(logs[0]["data"]["voiceId"], "alloy");
    assert_eq!(logs[11]["data"]["videoId"], body["videoId"]);

    let timestamps: Vec<&str> = logs.iter().map(|l| l["timestamp"].as_str().unwrap()).collect();
    let mut sorted = timestamps.clone();
    sorted.sort();
    assert_eq!(sorted, timestamps);
}

#[tokio::test]
async fn test_replayed_requests_are_independent_jobs() {
    let router = local_router();
    let payload = json!({ "script": narration_script() }).to_string();

    let (_, first) = post_job(router.clone(), payload.clone()).await;
    let (_, second) = post_job(router, payload).await;

    assert_ne!(first["videoId"], second["videoId"]);
    assert_eq!(
        first["logs"].as_array().unwrap().len(),
        second["logs"].as_array().unwrap().len()
    );
}

#[tokio::test]
async fn test_stage_failure_returns_partial_logs() {
    struct BrokenRenderer;

    #[async_trait]
    impl Renderer for BrokenRenderer {
        async fn render(
            &self,
            _narration: &NarrationAudio,
            _visuals: &VisualSequence,
            _music: &MusicTrack,
        ) -> StageResult<RenderedVideo> {
            Err(auteur_error::StageError::new("ffmpeg exited with status 1"))
        }
    }

    let router = router_with(
        Studio::local().with_renderer(Arc::new(BrokenRenderer)),
        Duration::from_secs(300),
    );
    let (status, body) = post_job(router, json!({ "script": narration_script() }).to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "Stage 'render' failed: ffmpeg exited with status 1");

    let stages: Vec<&str> = body["logs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["stage"].as_str().unwrap())
        .collect();
    assert_eq!(
        stages,
        vec!["narration", "narration", "footage", "footage", "music", "music", "render", "render"]
    );
    assert!(body.get("videoUrl").is_none());
}

#[tokio::test(start_paused = true)]
async fn test_ceiling_aborts_job_and_keeps_logs() {
    let router = router_with(
        Studio::local().with_renderer(Arc::new(StalledRenderer)),
        Duration::from_secs(1),
    );

    let (status, body) = post_job(router, json!({ "script": narration_script() }).to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Pipeline exceeded the maximum duration of 1s");
    let logs = body["logs"].as_array().unwrap();
    assert_eq!(logs.last().unwrap()["stage"], "render");
    assert_eq!(logs.last().unwrap()["message"], "Rendering video");
}

#[tokio::test]
async fn test_panicking_stage_is_an_unexpected_error() {
    let router = router_with(
        Studio::local().with_renderer(Arc::new(PanickingRenderer)),
        Duration::from_secs(300),
    );

    let (status, body) = post_job(router, json!({ "script": narration_script() }).to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "ok": false, "error": "encoder segfault" }));
}
