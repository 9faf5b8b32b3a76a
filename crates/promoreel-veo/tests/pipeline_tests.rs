//! Integration tests for the Veo pipeline against a mocked provider.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use promoreel_models::{GenerationRequest, GenerationResult, VideoHandle};
use promoreel_veo::{VeoConfig, VideoError, VideoGenerator};

const PRIMARY_PATH: &str = "/models/veo-3.0-fast-generate-preview:predictLongRunning";
const FALLBACK_PATH: &str = "/models/veo-2.0-generate-001:predictLongRunning";

fn fast_config(server: &MockServer) -> VeoConfig {
    VeoConfig::new("test-key", server.uri()).with_polling(Duration::from_millis(1), 5)
}

fn request() -> GenerationRequest {
    GenerationRequest::new("A calm morning, one continuous shot").with_duration(8)
}

#[tokio::test]
async fn inline_videos_complete_without_polling() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(PRIMARY_PATH))
        .and(body_partial_json(json!({
            "instances": [ { "prompt": "A calm morning, one continuous shot" } ],
            "parameters": { "aspectRatio": "16:9", "durationSeconds": 8 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "generatedVideos": [ { "video": { "uri": "https://cdn.example.com/v.mp4" } } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = VideoGenerator::new(fast_config(&server))
        .generate(&request())
        .await;

    assert!(result.is_playable());
    assert_eq!(result.video().unwrap().uri, "https://cdn.example.com/v.mp4");
}

#[tokio::test]
async fn operation_polls_to_completion() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(PRIMARY_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "name": "operations/op-1" })),
        )
        .mount(&server)
        .await;

    // Two not-done checks, then done with a video.
    Mock::given(method("GET"))
        .and(path("/operations/op-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "done": false })))
        .up_to_n_times(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/operations/op-1"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "done": true,
            "response": {
                "generateVideoResponse": {
                    "generatedSamples": [ { "video": { "uri": "https://cdn.example.com/done.mp4" } } ]
                }
            }
        })))
        .mount(&server)
        .await;

    let result = VideoGenerator::new(fast_config(&server))
        .generate(&request())
        .await;

    match result {
        GenerationResult::Completed { video } => {
            assert_eq!(video.uri, "https://cdn.example.com/done.mp4");
        }
        other => panic!("expected completed, got {other:?}"),
    }
}

#[tokio::test]
async fn done_with_error_fails_with_provider_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(PRIMARY_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "name": "operations/op-err" })),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/operations/op-err"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "done": true,
            "error": { "code": 8, "message": "quota exhausted for veo" }
        })))
        .mount(&server)
        .await;

    let result = VideoGenerator::new(fast_config(&server))
        .generate(&request())
        .await;

    assert_eq!(result.error_message(), Some("quota exhausted for veo"));
    assert_eq!(result.as_str(), "failed");
}

#[tokio::test]
async fn done_without_video_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(PRIMARY_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "name": "operations/op-empty" })),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/operations/op-empty"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "done": true, "response": {} })),
        )
        .mount(&server)
        .await;

    let result = VideoGenerator::new(fast_config(&server))
        .generate(&request())
        .await;

    assert_eq!(
        result.error_message(),
        Some("no video found in completed operation")
    );
}

#[tokio::test]
async fn poll_exhaustion_returns_pending_with_timeout_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(PRIMARY_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "name": "operations/op-slow" })),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/operations/op-slow"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "done": false })))
        .expect(120)
        .mount(&server)
        .await;

    let config =
        VeoConfig::new("test-key", server.uri()).with_polling(Duration::from_millis(1), 120);
    let result = VideoGenerator::new(config).generate(&request()).await;

    match result {
        GenerationResult::Pending { reason } => {
            assert!(reason.contains("120 polls"), "reason: {reason}");
        }
        other => panic!("expected pending, got {other:?}"),
    }
}

#[tokio::test]
async fn single_poll_transport_failure_is_skipped() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(PRIMARY_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "name": "operations/op-flaky" })),
        )
        .mount(&server)
        .await;

    // First check errors at the transport-ish level, second resolves.
    Mock::given(method("GET"))
        .and(path("/operations/op-flaky"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream hiccup"))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/operations/op-flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "done": true,
            "response": { "generatedVideos": [ { "video": { "uri": "https://cdn.example.com/f.mp4" } } ] }
        })))
        .mount(&server)
        .await;

    let result = VideoGenerator::new(fast_config(&server))
        .generate(&request())
        .await;

    assert!(result.is_playable());
}

#[tokio::test]
async fn primary_failure_uses_exactly_one_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(PRIMARY_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("primary down"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(FALLBACK_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "generatedVideos": [ { "video": { "uri": "https://cdn.example.com/fb.mp4" } } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = VideoGenerator::new(fast_config(&server))
        .generate(&request())
        .await;

    assert!(result.is_playable());
    assert_eq!(result.video().unwrap().uri, "https://cdn.example.com/fb.mp4");
}

#[tokio::test]
async fn double_failure_surfaces_primary_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(PRIMARY_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("primary exploded"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(FALLBACK_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("fallback also down"))
        .expect(1)
        .mount(&server)
        .await;

    let result = VideoGenerator::new(fast_config(&server))
        .generate(&request())
        .await;

    let message = result.error_message().unwrap();
    assert!(message.contains("primary exploded"), "message: {message}");
    assert!(!message.contains("fallback also down"), "message: {message}");
}

#[tokio::test]
async fn unrecognized_shape_fails_with_bounded_diagnostic() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(PRIMARY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "something": "x".repeat(4096)
        })))
        // Unrecognized is terminal: the fallback variant must not be tried.
        .expect(1)
        .mount(&server)
        .await;

    let result = VideoGenerator::new(fast_config(&server))
        .generate(&request())
        .await;

    let message = result.error_message().unwrap();
    assert!(message.starts_with("unrecognized video API response"));
    assert!(message.len() < 700, "diagnostic not bounded: {} bytes", message.len());
}

#[tokio::test]
async fn materialize_appends_key_and_downloads_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/video-1"))
        .and(query_param("key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "video/mp4")
                .set_body_bytes(vec![7u8; 64]),
        )
        .expect(1)
        .mount(&server)
        .await;

    let generator = VideoGenerator::new(fast_config(&server));
    let handle = VideoHandle::new(format!("{}/files/video-1", server.uri()));

    let asset = generator.materialize(&handle).await.unwrap();
    assert_eq!(asset.size(), 64);
    assert_eq!(asset.mime_type, "video/mp4");
    assert_eq!(asset.source_uri, handle.uri);
}

#[tokio::test]
async fn materialize_failure_is_its_own_error_kind() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let generator = VideoGenerator::new(fast_config(&server));
    let handle = VideoHandle::new(format!("{}/files/missing", server.uri()));

    let err = generator.materialize(&handle).await.unwrap_err();
    assert!(matches!(err, VideoError::Materialize(_)), "got {err:?}");
}
