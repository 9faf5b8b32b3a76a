//! Video pipeline error types.

use thiserror::Error;

pub type VideoResult<T> = Result<T, VideoError>;

#[derive(Debug, Error)]
pub enum VideoError {
    #[error("GEMINI_API_KEY not configured")]
    MissingApiKey,

    #[error("video submission failed: {0}")]
    Submit(String),

    #[error("video API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("operation poll failed: {0}")]
    Poll(String),

    #[error("failed to materialize video asset: {0}")]
    Materialize(String),
}

impl VideoError {
    pub fn submit(msg: impl Into<String>) -> Self {
        Self::Submit(msg.into())
    }

    pub fn poll(msg: impl Into<String>) -> Self {
        Self::Poll(msg.into())
    }

    pub fn materialize(msg: impl Into<String>) -> Self {
        Self::Materialize(msg.into())
    }
}
