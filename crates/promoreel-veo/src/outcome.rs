//! Submission response classification.

use serde_json::Value;

use promoreel_models::{OperationHandle, VideoHandle};

/// Upper bound on diagnostic payloads kept from unrecognized responses.
const MAX_DIAGNOSTIC_LEN: usize = 512;

/// The three shapes a video submission response can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The provider returned generated video inline
    Immediate(VideoHandle),
    /// The provider returned a long-running operation to poll
    Operation(OperationHandle),
    /// Neither shape matched; carries a truncated diagnostic dump
    Unrecognized(String),
}

impl SubmitOutcome {
    /// Classify a submission response body.
    pub fn classify(body: &Value) -> SubmitOutcome {
        if let Some(name) = body.get("name").and_then(Value::as_str) {
            if !name.is_empty() {
                return SubmitOutcome::Operation(OperationHandle::new(name));
            }
        }

        if let Some(video) = find_video_handle(body) {
            return SubmitOutcome::Immediate(video);
        }

        SubmitOutcome::Unrecognized(truncate_diagnostic(&body.to_string()))
    }
}

/// Search a response payload for a playable video reference.
///
/// Covers the shapes the provider is known to emit, both inline on
/// submission and inside a completed operation's `response` field.
pub(crate) fn find_video_handle(value: &Value) -> Option<VideoHandle> {
    let candidates = [
        &["generateVideoResponse", "generatedSamples"][..],
        &["generatedSamples"][..],
        &["generatedVideos"][..],
        &["videos"][..],
    ];

    for path in candidates {
        let mut node = value;
        let mut matched = true;
        for key in path {
            match node.get(key) {
                Some(next) => node = next,
                None => {
                    matched = false;
                    break;
                }
            }
        }
        if !matched {
            continue;
        }

        // An empty or uri-less array on one path must not mask a video
        // sitting under a later candidate shape.
        let Some(first) = node.get(0) else {
            continue;
        };
        let uri = match first
            .get("video")
            .and_then(|v| v.get("uri"))
            .or_else(|| first.get("uri"))
            .and_then(Value::as_str)
        {
            Some(uri) if !uri.is_empty() => uri,
            _ => continue,
        };

        let mime = first
            .get("video")
            .and_then(|v| v.get("mimeType"))
            .or_else(|| first.get("mimeType"))
            .and_then(Value::as_str);

        let mut handle = VideoHandle::new(uri);
        if let Some(mime) = mime {
            handle = handle.with_mime_type(mime);
        }
        return Some(handle);
    }

    None
}

/// Truncate a diagnostic string to a bounded length on a char boundary.
pub(crate) fn truncate_diagnostic(s: &str) -> String {
    if s.len() <= MAX_DIAGNOSTIC_LEN {
        return s.to_string();
    }
    let mut end = MAX_DIAGNOSTIC_LEN;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... (truncated)", &s[..end])
}
