//! The generation coordinator state machine.

use anyhow::anyhow;
use tracing::{info, warn};
use uuid::Uuid;

use promoreel_content::SnippetStore;
use promoreel_models::{
    ContentSnippet, GenerationRecord, GenerationRequest, GenerationResult, GenerationStatus,
    MaterializedAsset, ThemeDescriptor, ThemeId, VideoScript, DEFAULT_THEME,
};
use promoreel_script::ScriptGenerator;
use promoreel_veo::VideoGenerator;

/// How the prompt script is obtained for a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptMode {
    /// Substitute the fixed literal ad script; no text model call
    FixedAd,
    /// Generate a fresh script from the selected theme's snippets
    Auto,
}

/// Coordinates one generation sequence at a time.
///
/// All state observed by the presentation layer lives here. Methods take
/// `&mut self`, so a single coordinator cannot interleave two sequences;
/// callers sharing one across tasks must gate triggers on [`Self::is_busy`].
pub struct Coordinator {
    store: SnippetStore,
    script_generator: ScriptGenerator,
    video_generator: VideoGenerator,

    status: GenerationStatus,
    error: Option<String>,
    theme: ThemeId,
    snippets: Vec<ContentSnippet>,
    script: Option<VideoScript>,
    record: Option<GenerationRecord>,
    asset: Option<MaterializedAsset>,
}

impl Coordinator {
    /// Create a coordinator from its collaborators.
    pub fn new(
        store: SnippetStore,
        script_generator: ScriptGenerator,
        video_generator: VideoGenerator,
    ) -> Self {
        Self {
            store,
            script_generator,
            video_generator,
            status: GenerationStatus::Idle,
            error: None,
            theme: ThemeId::new(DEFAULT_THEME),
            snippets: Vec::new(),
            script: None,
            record: None,
            asset: None,
        }
    }

    /// Select a theme and prefetch its snippets.
    ///
    /// The content boundary is infallible (it falls back to static data), so
    /// this always returns to `Idle`.
    pub async fn select_theme(&mut self, theme: ThemeId) {
        self.status = GenerationStatus::FetchingContent;
        self.snippets = self.store.fetch_snippets(&theme).await;
        info!(theme = %theme, count = self.snippets.len(), "theme selected");
        self.theme = theme;
        self.status = GenerationStatus::Idle;
    }

    /// Run one full generation sequence.
    ///
    /// Releases the previous sequence's asset and result first. Every
    /// failure, including a pending (timed-out) video result, lands in the
    /// `Error` status with a message; the coordinator itself never errors.
    pub async fn generate(&mut self, mode: ScriptMode) {
        // Release transient resources from the previous sequence.
        self.asset = None;
        self.record = None;
        self.error = None;
        self.script = None;

        let sequence_id = Uuid::new_v4();
        info!(%sequence_id, ?mode, theme = %self.theme, "starting generation sequence");

        if let Err(e) = self.run_sequence(sequence_id, mode).await {
            let mut message = e.to_string();
            if message.trim().is_empty() {
                message = "generation failed".to_string();
            }
            warn!(%sequence_id, "generation sequence failed: {message}");
            self.error = Some(message);
            self.status = GenerationStatus::Error;
        }
    }

    async fn run_sequence(&mut self, sequence_id: Uuid, mode: ScriptMode) -> anyhow::Result<()> {
        let script = match mode {
            ScriptMode::FixedAd => VideoScript::fixed_ad(),
            ScriptMode::Auto => {
                if self.snippets.is_empty() {
                    self.status = GenerationStatus::FetchingContent;
                    self.snippets = self.store.fetch_snippets(&self.theme).await;
                }

                self.status = GenerationStatus::GeneratingScript;
                let theme = ThemeDescriptor::resolve(&self.theme);
                self.script_generator
                    .generate(&theme, &self.snippets, 8)
                    .await?
            }
        };

        let request =
            GenerationRequest::new(script.prompt.clone()).with_duration(script.duration_secs);
        self.script = Some(script);

        self.status = GenerationStatus::GeneratingVideo;
        let result = self.video_generator.generate(&request).await;
        info!(%sequence_id, result = %result, "video pipeline finished");
        self.record = Some(GenerationRecord::new(sequence_id, result.clone()));

        match result {
            GenerationResult::Completed { video } if !video.uri.is_empty() => {
                match self.video_generator.materialize(&video).await {
                    Ok(asset) => {
                        self.asset = Some(asset);
                        self.status = GenerationStatus::Completed;
                        Ok(())
                    }
                    Err(e) => {
                        // A completed generation without a playable asset is a
                        // failed sequence; rewrite the record so result() and
                        // status() agree.
                        let message = e.to_string();
                        self.record = Some(GenerationRecord::new(
                            sequence_id,
                            GenerationResult::failed(message.clone()),
                        ));
                        Err(anyhow!(message))
                    }
                }
            }
            GenerationResult::Completed { .. } => {
                Err(anyhow!("completed generation carried no playable reference"))
            }
            // A pending (timed-out) result is terminal for this sequence and
            // surfaces exactly like a failure; the record keeps the pending
            // tag for callers that want to distinguish it.
            GenerationResult::Pending { reason } => Err(anyhow!(reason)),
            GenerationResult::Failed { error } => Err(anyhow!(error)),
        }
    }

    /// Current status.
    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    /// Error message from the last sequence, if it failed.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Currently selected theme.
    pub fn theme(&self) -> &ThemeId {
        &self.theme
    }

    /// Snippets cached for the selected theme.
    pub fn snippets(&self) -> &[ContentSnippet] {
        &self.snippets
    }

    /// Script used by the last sequence, if one was produced.
    pub fn script(&self) -> Option<&VideoScript> {
        self.script.as_ref()
    }

    /// Result of the last video pipeline run.
    pub fn result(&self) -> Option<&GenerationResult> {
        self.record.as_ref().map(|r| &r.result)
    }

    /// Full record (sequence id, timestamp, result) of the last run.
    pub fn record(&self) -> Option<&GenerationRecord> {
        self.record.as_ref()
    }

    /// Materialized asset from the last completed sequence.
    pub fn asset(&self) -> Option<&MaterializedAsset> {
        self.asset.as_ref()
    }

    /// True while a sequence is in flight.
    pub fn is_busy(&self) -> bool {
        self.status.is_busy()
    }
}
