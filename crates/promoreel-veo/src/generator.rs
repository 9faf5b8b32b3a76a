//! Veo submission, polling and asset materialization.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use promoreel_models::{
    GenerationRequest, GenerationResult, MaterializedAsset, OperationHandle, VideoHandle,
};

use crate::config::VeoConfig;
use crate::error::{VideoError, VideoResult};
use crate::outcome::{find_video_handle, SubmitOutcome};

/// Veo long-running prediction request.
#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<Instance>,
    parameters: Parameters,
}

#[derive(Debug, Serialize)]
struct Instance {
    prompt: String,
}

#[derive(Debug, Serialize)]
struct Parameters {
    #[serde(rename = "aspectRatio")]
    aspect_ratio: String,
    #[serde(rename = "durationSeconds")]
    duration_seconds: u32,
    #[serde(rename = "personGeneration")]
    person_generation: String,
}

/// Long-running operation status returned by the poll endpoint.
#[derive(Debug, Deserialize)]
struct OperationStatus {
    #[serde(default)]
    done: bool,
    error: Option<OperationError>,
    response: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct OperationError {
    message: Option<String>,
    code: Option<i64>,
}

/// The video generation pipeline.
pub struct VideoGenerator {
    config: VeoConfig,
    client: Client,
}

impl VideoGenerator {
    /// Create a new generator.
    pub fn new(config: VeoConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Run a generation request to a terminal result.
    ///
    /// Never returns an error: submission failures (after the single variant
    /// fallback), provider-reported failures, unrecognized payloads and poll
    /// exhaustion all fold into the returned [`GenerationResult`].
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        let outcome = match self.submit_with_fallback(request).await {
            Ok(outcome) => outcome,
            Err(e) => return GenerationResult::failed(e.to_string()),
        };

        match outcome {
            SubmitOutcome::Immediate(video) => {
                info!(uri = %video.uri, "provider returned video inline");
                GenerationResult::completed(video)
            }
            SubmitOutcome::Operation(handle) => {
                info!(operation = %handle, "provider returned operation, polling");
                self.poll_operation(&handle).await
            }
            SubmitOutcome::Unrecognized(diag) => {
                GenerationResult::failed(format!("unrecognized video API response: {diag}"))
            }
        }
    }

    /// Submit with the primary model, falling back to exactly one alternate
    /// variant. If both submissions fail the primary error is surfaced so a
    /// later attempt's failure never shadows the original cause.
    async fn submit_with_fallback(
        &self,
        request: &GenerationRequest,
    ) -> VideoResult<SubmitOutcome> {
        let primary = self.config.primary_model.clone();
        match self.submit(&primary, request).await {
            Ok(outcome) => Ok(outcome),
            Err(primary_err) => {
                let Some(fallback) = self.config.fallback_model.clone() else {
                    return Err(primary_err);
                };
                warn!(
                    model = %primary,
                    "primary submission failed ({primary_err}), trying fallback {fallback}"
                );
                match self.submit(&fallback, request).await {
                    Ok(outcome) => Ok(outcome),
                    Err(fallback_err) => {
                        warn!(model = %fallback, "fallback submission also failed: {fallback_err}");
                        Err(primary_err)
                    }
                }
            }
        }
    }

    async fn submit(
        &self,
        model: &str,
        request: &GenerationRequest,
    ) -> VideoResult<SubmitOutcome> {
        let url = format!(
            "{}/models/{}:predictLongRunning?key={}",
            self.config.base_url.trim_end_matches('/'),
            model,
            self.config.api_key
        );

        let body = PredictRequest {
            instances: vec![Instance {
                prompt: request.prompt.clone(),
            }],
            parameters: Parameters {
                aspect_ratio: request.aspect_ratio.as_str().to_string(),
                duration_seconds: request.duration_secs,
                person_generation: request.person_generation.as_str().to_string(),
            },
        };

        debug!(model, duration = request.duration_secs, "submitting video request");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| VideoError::submit(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(VideoError::Api { status, body });
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| VideoError::submit(format!("invalid response body: {e}")))?;

        Ok(SubmitOutcome::classify(&value))
    }

    /// Poll an operation to a terminal result under the attempt budget.
    ///
    /// A transport failure on a single check is logged and skipped; the loop
    /// stays safe because the budget bounds it regardless.
    async fn poll_operation(&self, handle: &OperationHandle) -> GenerationResult {
        let max = self.config.max_poll_attempts;

        for attempt in 1..=max {
            tokio::time::sleep(self.config.poll_interval).await;

            let status = match self.fetch_operation(handle).await {
                Ok(status) => status,
                Err(e) => {
                    warn!(attempt, max, operation = %handle, "poll check failed: {e}");
                    continue;
                }
            };

            if !status.done {
                debug!(attempt, max, operation = %handle, "operation still running");
                continue;
            }

            if let Some(err) = status.error {
                let message = err
                    .message
                    .unwrap_or_else(|| format!("provider error code {}", err.code.unwrap_or(-1)));
                return GenerationResult::failed(message);
            }

            if let Some(video) = status.response.as_ref().and_then(find_video_handle) {
                return GenerationResult::completed(video);
            }

            return GenerationResult::failed(
                "no video found in completed operation".to_string(),
            );
        }

        let budget = self.config.poll_interval * max;
        GenerationResult::pending(format!(
            "video generation did not finish within {} polls ({:?}); resubmit to retry",
            max, budget
        ))
    }

    async fn fetch_operation(&self, handle: &OperationHandle) -> VideoResult<OperationStatus> {
        let url = format!(
            "{}/{}?key={}",
            self.config.base_url.trim_end_matches('/'),
            handle.as_str().trim_start_matches('/'),
            self.config.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| VideoError::poll(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(VideoError::Api { status, body });
        }

        response
            .json()
            .await
            .map_err(|e| VideoError::poll(format!("invalid operation body: {e}")))
    }

    /// Download a finished video behind its authenticated URL and wrap it as
    /// a locally playable asset. Fails independently of generation itself.
    pub async fn materialize(&self, video: &VideoHandle) -> VideoResult<MaterializedAsset> {
        let mut url = Url::parse(&video.uri)
            .map_err(|e| VideoError::materialize(format!("bad video uri: {e}")))?;
        url.query_pairs_mut().append_pair("key", &self.config.api_key);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| VideoError::materialize(e.to_string()))?;

        if !response.status().is_success() {
            return Err(VideoError::materialize(format!(
                "asset download returned {}",
                response.status()
            )));
        }

        let mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
            .or_else(|| video.mime_type.clone())
            .unwrap_or_else(|| "video/mp4".to_string());

        let bytes = response
            .bytes()
            .await
            .map_err(|e| VideoError::materialize(e.to_string()))?;

        if bytes.is_empty() {
            return Err(VideoError::materialize("asset download was empty"));
        }

        info!(uri = %video.uri, size = bytes.len(), "materialized video asset");

        Ok(MaterializedAsset::new(
            bytes.to_vec(),
            mime_type,
            video.uri.clone(),
        ))
    }
}
