//! Generation result and operation handle models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque handle to a long-running video generation operation.
///
/// Created on submission, consumed by polling, discarded once the operation
/// reaches a terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationHandle(pub String);

impl OperationHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OperationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Provider-side reference to a generated video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoHandle {
    /// Download URI returned by the provider
    pub uri: String,
    /// MIME type if the provider reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl VideoHandle {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime: impl Into<String>) -> Self {
        self.mime_type = Some(mime.into());
        self
    }
}

/// Terminal artifact of the video pipeline. Never mutated after creation;
/// a new attempt produces a new result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GenerationResult {
    /// Generation finished with a playable video reference
    Completed { video: VideoHandle },
    /// The poll budget ran out before the operation resolved
    Pending { reason: String },
    /// Generation failed with a human-readable error
    Failed { error: String },
}

impl GenerationResult {
    pub fn completed(video: VideoHandle) -> Self {
        Self::Completed { video }
    }

    pub fn pending(reason: impl Into<String>) -> Self {
        Self::Pending {
            reason: reason.into(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    /// State tag as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationResult::Completed { .. } => "completed",
            GenerationResult::Pending { .. } => "pending",
            GenerationResult::Failed { .. } => "failed",
        }
    }

    /// True only for a completed result carrying a non-empty video uri.
    pub fn is_playable(&self) -> bool {
        matches!(self, GenerationResult::Completed { video } if !video.uri.is_empty())
    }

    /// The video handle for a completed result.
    pub fn video(&self) -> Option<&VideoHandle> {
        match self {
            GenerationResult::Completed { video } => Some(video),
            _ => None,
        }
    }

    /// The message a caller should surface for a non-completed result.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            GenerationResult::Completed { .. } => None,
            GenerationResult::Pending { reason } => Some(reason),
            GenerationResult::Failed { error } => Some(error),
        }
    }
}

impl fmt::Display for GenerationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A generation result together with sequence identity and timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Id of the generation sequence that produced this result
    pub sequence_id: Uuid,
    /// When the result was produced
    pub created_at: DateTime<Utc>,
    /// The result itself
    pub result: GenerationResult,
}

impl GenerationRecord {
    pub fn new(sequence_id: Uuid, result: GenerationResult) -> Self {
        Self {
            sequence_id,
            created_at: Utc::now(),
            result,
        }
    }
}
