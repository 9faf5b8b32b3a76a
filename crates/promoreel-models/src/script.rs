//! Video script model with timed scenes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single timed scene inside a video script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene start time in seconds
    pub start_secs: u32,
    /// Scene end time in seconds (exclusive upper bound)
    pub end_secs: u32,
    /// Visual description for the video model
    pub visual: String,
    /// Optional on-screen overlay text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_text: Option<String>,
}

impl Scene {
    /// Create a new scene.
    pub fn new(start_secs: u32, end_secs: u32, visual: impl Into<String>) -> Self {
        Self {
            start_secs,
            end_secs,
            visual: visual.into(),
            overlay_text: None,
        }
    }

    /// Attach overlay text.
    pub fn with_overlay(mut self, text: impl Into<String>) -> Self {
        self.overlay_text = Some(text.into());
        self
    }
}

/// Scene timeline violations detected by [`VideoScript::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptValidationError {
    #[error("script has no scenes")]
    NoScenes,

    #[error("first scene starts at {0}s, expected 0s")]
    StartNotZero(u32),

    #[error("scene {index} covers an empty or inverted range ({start}s-{end}s)")]
    EmptyRange { index: usize, start: u32, end: u32 },

    #[error("scene {index} starts at {found}s, expected {expected}s (scenes must be contiguous)")]
    Discontiguous {
        index: usize,
        expected: u32,
        found: u32,
    },

    #[error("last scene ends at {found}s, expected {expected}s (scenes must cover the full duration)")]
    DurationMismatch { expected: u32, found: u32 },
}

/// A complete promotional video script.
///
/// A `VideoScript` is either the fixed literal ad or the parsed output of the
/// script generator. It is never partially filled: scenes are contiguous,
/// non-overlapping, and cover `[0, duration_secs]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoScript {
    /// Script title
    pub title: String,
    /// Target video duration in seconds
    pub duration_secs: u32,
    /// Ordered timed scenes
    pub scenes: Vec<Scene>,
    /// Single voiceover line spoken over the whole video
    pub voiceover: String,
    /// Final prompt text submitted to the video model
    pub prompt: String,
}

impl VideoScript {
    /// Check the scene-timeline invariant.
    pub fn validate(&self) -> Result<(), ScriptValidationError> {
        if self.scenes.is_empty() {
            return Err(ScriptValidationError::NoScenes);
        }

        let first = &self.scenes[0];
        if first.start_secs != 0 {
            return Err(ScriptValidationError::StartNotZero(first.start_secs));
        }

        let mut cursor = 0u32;
        for (index, scene) in self.scenes.iter().enumerate() {
            if scene.end_secs <= scene.start_secs {
                return Err(ScriptValidationError::EmptyRange {
                    index,
                    start: scene.start_secs,
                    end: scene.end_secs,
                });
            }
            if scene.start_secs != cursor {
                return Err(ScriptValidationError::Discontiguous {
                    index,
                    expected: cursor,
                    found: scene.start_secs,
                });
            }
            cursor = scene.end_secs;
        }

        if cursor != self.duration_secs {
            return Err(ScriptValidationError::DurationMismatch {
                expected: self.duration_secs,
                found: cursor,
            });
        }

        Ok(())
    }

    /// The fixed literal ad script used in literal-script mode.
    ///
    /// Four scenes covering 0-2, 2-5, 5-7 and 7-8 seconds of an 8 second
    /// spot. No remote call is involved when this script is used.
    pub fn fixed_ad() -> VideoScript {
        VideoScript {
            title: "Revita: Morning, Reclaimed".to_string(),
            duration_secs: 8,
            scenes: vec![
                Scene::new(
                    0,
                    2,
                    "Soft dawn light through a kitchen window, a woman in her 50s opens the curtains and smiles",
                ),
                Scene::new(
                    2,
                    5,
                    "She moves easily through her morning: pouring coffee, stretching, lacing up walking shoes",
                )
                .with_overlay("Proven relief, day after day"),
                Scene::new(
                    5,
                    7,
                    "Outside on a tree-lined street, she walks briskly and waves to a neighbor",
                ),
                Scene::new(7, 8, "Product pack shot on a clean white surface, logo centered")
                    .with_overlay("Revita. Ask your doctor."),
            ],
            voiceover: "With Revita, mornings feel like yours again. Talk to your doctor about whether Revita is right for you.".to_string(),
            prompt: "Cinematic 8 second pharmaceutical commercial, one continuous shot: dawn light in a warm kitchen, a woman in her 50s opens the curtains, moves easily through her morning routine, steps outside for a brisk walk on a tree-lined street, ending on a clean product pack shot with the Revita logo. Warm, hopeful tone, natural colors, no text artifacts.".to_string(),
        }
    }
}
