use auteur_core::{JobOutcome, PrivacyStatus, StageName, parse_job_request};
use serde_json::json;

#[test]
fn test_client_reads_success_envelope() {
    let body = json!({
        "ok": true,
        "videoUrl": "https://www.youtube.com/watch?v=abc123def45",
        "videoId": "abc123def45",
        "durationSeconds": 42.5,
        "metadata": {
            "title": "Solar cities",
            "description": "How rooftops power neighborhoods.",
            "tags": ["solar", "energy"],
            "thumbnailPrompt": "Sunlit skyline"
        },
        "logs": [
            { "stage": "upload", "message": "Video published", "timestamp": "2026-10-17T10:00:02.000Z" },
            { "stage": "narration", "message": "Synthesizing narration", "timestamp": "2026-10-17T10:00:00.000Z" }
        ]
    });

    let outcome: JobOutcome = serde_json::from_value(body).unwrap();
    assert!(outcome.is_ok());

    let mut logs = outcome.logs().unwrap().to_vec();
    logs.sort_by_key(|entry| *entry.timestamp());
    assert_eq!(logs[0].stage(), StageName::Narration.as_str());
    assert_eq!(logs[1].stage(), StageName::Upload.as_str());
}

#[test]
fn test_client_reads_rejection_without_logs() {
    let outcome: JobOutcome =
        serde_json::from_value(json!({ "ok": false, "error": "Invalid JSON payload" })).unwrap();

    assert!(!outcome.is_ok());
    assert!(outcome.logs().is_none());
}

#[test]
fn test_envelope_without_discriminator_is_rejected() {
    let result = serde_json::from_value::<JobOutcome>(json!({ "error": "boom" }));
    assert!(result.is_err());
}

#[test]
fn test_request_body_round_trips_into_request() {
    let script = "word ".repeat(30);
    let body = json!({
        "script": script,
        "musicPrompt": "  calm piano  ",
        "privacyStatus": "public"
    })
    .to_string();

    let request = parse_job_request(body.as_bytes()).unwrap();

    assert_eq!(request.music_prompt().as_deref(), Some("calm piano"));
    assert_eq!(*request.privacy_status(), PrivacyStatus::Public);
    assert_eq!(request.voice(), "alloy");
}
