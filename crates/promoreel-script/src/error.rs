//! Script generator error types.

use promoreel_models::ScriptValidationError;
use thiserror::Error;

pub type ScriptResult<T> = Result<T, ScriptError>;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("GEMINI_API_KEY not configured")]
    MissingApiKey,

    #[error("script generation request failed: {0}")]
    Request(String),

    #[error("script generation API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("no content in script generation response")]
    EmptyResponse,

    #[error("failed to parse script JSON: {0}")]
    Parse(String),

    #[error("generated script is invalid: {0}")]
    InvalidScript(#[from] ScriptValidationError),
}

impl ScriptError {
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
