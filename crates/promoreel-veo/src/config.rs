//! Video pipeline configuration.

use std::time::Duration;

use crate::error::{VideoError, VideoResult};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_PRIMARY_MODEL: &str = "veo-3.0-fast-generate-preview";
const DEFAULT_FALLBACK_MODEL: &str = "veo-2.0-generate-001";

/// Fixed wait between operation polls.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);
/// Poll attempt budget; with the default interval this bounds a generation
/// at 10 minutes.
const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 120;

/// Veo pipeline configuration.
#[derive(Debug, Clone)]
pub struct VeoConfig {
    /// Gemini API key (shared with the text endpoint)
    pub api_key: String,
    /// API base URL (overridable for tests)
    pub base_url: String,
    /// Model variant tried first
    pub primary_model: String,
    /// Single fallback variant tried after a failed submission
    pub fallback_model: Option<String>,
    /// Wait between operation polls
    pub poll_interval: Duration,
    /// Maximum number of polls before giving up as pending
    pub max_poll_attempts: u32,
}

impl VeoConfig {
    /// Create config from environment variables.
    pub fn from_env() -> VideoResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| VideoError::MissingApiKey)?;
        Ok(Self {
            api_key,
            base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            primary_model: std::env::var("VEO_PRIMARY_MODEL")
                .unwrap_or_else(|_| DEFAULT_PRIMARY_MODEL.to_string()),
            fallback_model: Some(
                std::env::var("VEO_FALLBACK_MODEL")
                    .unwrap_or_else(|_| DEFAULT_FALLBACK_MODEL.to_string()),
            ),
            poll_interval: Duration::from_secs(
                std::env::var("VEO_POLL_INTERVAL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_POLL_INTERVAL.as_secs()),
            ),
            max_poll_attempts: std::env::var("VEO_MAX_POLL_ATTEMPTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_POLL_ATTEMPTS),
        })
    }

    /// Config for a specific endpoint and key, with default models and
    /// polling knobs.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            primary_model: DEFAULT_PRIMARY_MODEL.to_string(),
            fallback_model: Some(DEFAULT_FALLBACK_MODEL.to_string()),
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_poll_attempts: DEFAULT_MAX_POLL_ATTEMPTS,
        }
    }

    /// Override polling cadence (used by tests to shrink wall-clock time).
    pub fn with_polling(mut self, interval: Duration, max_attempts: u32) -> Self {
        self.poll_interval = interval;
        self.max_poll_attempts = max_attempts;
        self
    }

    /// Override the model variants.
    pub fn with_models(
        mut self,
        primary: impl Into<String>,
        fallback: Option<String>,
    ) -> Self {
        self.primary_model = primary.into();
        self.fallback_model = fallback;
        self
    }
}
