//! Pipeline status state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current status of the generation coordinator.
///
/// Exactly one status is active at a time. The three in-flight states mark a
/// sequence as busy; callers should gate new triggers on [`Self::is_busy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    /// No sequence in flight
    #[default]
    Idle,
    /// Fetching content snippets for the selected theme
    FetchingContent,
    /// Waiting on the script generator
    GeneratingScript,
    /// Waiting on the video pipeline (submission, polling, materialize)
    GeneratingVideo,
    /// Last sequence finished with a playable asset
    Completed,
    /// Last sequence finished with an error
    Error,
}

impl GenerationStatus {
    /// Get string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStatus::Idle => "idle",
            GenerationStatus::FetchingContent => "fetching_content",
            GenerationStatus::GeneratingScript => "generating_script",
            GenerationStatus::GeneratingVideo => "generating_video",
            GenerationStatus::Completed => "completed",
            GenerationStatus::Error => "error",
        }
    }

    /// True while a generation sequence is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            GenerationStatus::FetchingContent
                | GenerationStatus::GeneratingScript
                | GenerationStatus::GeneratingVideo
        )
    }

    /// True for states a new sequence may be started from.
    pub fn is_quiescent(&self) -> bool {
        !self.is_busy()
    }
}

impl fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
