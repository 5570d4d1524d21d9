//! Job lifetime tests for the dispatcher.

use async_trait::async_trait;
use auteur_core::{JobRequest, MusicTrack, NarrationAudio, RenderedVideo, VisualSequence};
use auteur_interface::{Renderer, StageResult};
use auteur_pipeline::{PipelineExecutor, Studio};
use auteur_server::{AppState, run_job};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Sets its flag when the render future holding it is dropped.
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// Renderer that parks forever and reports when it is torn down.
struct ParkedRenderer {
    started: Arc<AtomicBool>,
    dropped: Arc<AtomicBool>,
}

#[async_trait]
impl Renderer for ParkedRenderer {
    async fn render(
        &self,
        _narration: &NarrationAudio,
        _visuals: &VisualSequence,
        _music: &MusicTrack,
    ) -> StageResult<RenderedVideo> {
        let _flag = DropFlag(Arc::clone(&self.dropped));
        self.started.store(true, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(3600)).await;
        unreachable!("the job is aborted before the render finishes")
    }
}

fn request() -> JobRequest {
    JobRequest::builder()
        .script(
            "Deep sea vents host life that never sees the sun. Bacteria feed on chemicals \
             instead of light, and whole ecosystems grow around them.",
        )
        .build()
        .unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_abandoned_job_is_torn_down() {
    let started = Arc::new(AtomicBool::new(false));
    let dropped = Arc::new(AtomicBool::new(false));
    let renderer = ParkedRenderer {
        started: Arc::clone(&started),
        dropped: Arc::clone(&dropped),
    };
    let state = AppState::new(
        PipelineExecutor::new(Studio::local().with_renderer(Arc::new(renderer))),
        Duration::from_secs(300),
    );

    let request = request();
    tokio::select! {
        _ = run_job(&state, request) => panic!("job finished despite a parked renderer"),
        _ = tokio::time::sleep(Duration::from_millis(100)) => {}
    }
    assert!(started.load(Ordering::SeqCst));

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(dropped.load(Ordering::SeqCst));
}

#[tokio::test(start_paused = true)]
async fn test_ceiling_tears_down_running_stage() {
    let started = Arc::new(AtomicBool::new(false));
    let dropped = Arc::new(AtomicBool::new(false));
    let renderer = ParkedRenderer {
        started: Arc::clone(&started),
        dropped: Arc::clone(&dropped),
    };
    let state = AppState::new(
        PipelineExecutor::new(Studio::local().with_renderer(Arc::new(renderer))),
        Duration::from_secs(1),
    );

    let err = run_job(&state, request()).await.unwrap_err();
    assert_eq!(
        err.client_message(),
        "Pipeline exceeded the maximum duration of 1s"
    );

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(dropped.load(Ordering::SeqCst));
}
