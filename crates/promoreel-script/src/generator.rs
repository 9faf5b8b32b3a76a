//! Gemini generateContent client for script generation.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use promoreel_models::{ContentSnippet, ThemeDescriptor, VideoScript};

use crate::error::{ScriptError, ScriptResult};
use crate::prompt::{build_script_prompt, SCRIPT_SYSTEM_PROMPT};

/// Fixed low sampling temperature for consistent, parseable output.
const SCRIPT_TEMPERATURE: f32 = 0.2;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Script generator configuration.
#[derive(Debug, Clone)]
pub struct ScriptConfig {
    /// Gemini API key
    pub api_key: String,
    /// API base URL (overridable for tests)
    pub base_url: String,
    /// Text model to use
    pub model: String,
}

impl ScriptConfig {
    /// Create config from environment variables.
    pub fn from_env() -> ScriptResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| ScriptError::MissingApiKey)?;
        Ok(Self {
            api_key,
            base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            model: std::env::var("GEMINI_TEXT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }

    /// Config for a specific endpoint and key.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// Gemini API request.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    temperature: f32,
}

/// Gemini API response.
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: String,
}

/// Gemini-backed script generator.
pub struct ScriptGenerator {
    config: ScriptConfig,
    client: Client,
}

impl ScriptGenerator {
    /// Create a new generator.
    pub fn new(config: ScriptConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Generate a script for a theme.
    ///
    /// One request per call; any failure (transport, API status, missing
    /// content, JSON shape, scene-timeline violation) propagates untouched.
    pub async fn generate(
        &self,
        theme: &ThemeDescriptor,
        snippets: &[ContentSnippet],
        duration_secs: u32,
    ) -> ScriptResult<VideoScript> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
            self.config.api_key
        );

        let request = GeminiRequest {
            system_instruction: Content {
                parts: vec![Part {
                    text: SCRIPT_SYSTEM_PROMPT.to_string(),
                }],
            },
            contents: vec![Content {
                parts: vec![Part {
                    text: build_script_prompt(theme, snippets, duration_secs),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                temperature: SCRIPT_TEMPERATURE,
            },
        };

        debug!(theme = %theme.id, model = %self.config.model, "requesting script");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ScriptError::request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ScriptError::Api { status, body });
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| ScriptError::parse(format!("response envelope: {e}")))?;

        let text = gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or(ScriptError::EmptyResponse)?;

        let script: VideoScript = serde_json::from_str(strip_code_fences(text))
            .map_err(|e| ScriptError::parse(e.to_string()))?;
        script.validate()?;

        info!(
            theme = %theme.id,
            title = %script.title,
            scenes = script.scenes.len(),
            "generated script"
        );

        Ok(script)
    }
}

/// Strip optional markdown code fences around a JSON payload.
fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
    }
}
