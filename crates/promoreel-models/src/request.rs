//! Video generation request model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target aspect ratio for generated video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AspectRatio {
    /// 16:9 landscape
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
    /// 9:16 portrait
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Portrait => "9:16",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Person-depiction policy flag passed to the video provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PersonGeneration {
    /// Allow depictions of adults (provider default for ads)
    #[default]
    AllowAdult,
    /// Allow depictions of people of any age
    AllowAll,
    /// Disallow depictions of people entirely
    DontAllow,
}

impl PersonGeneration {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonGeneration::AllowAdult => "allow_adult",
            PersonGeneration::AllowAll => "allow_all",
            PersonGeneration::DontAllow => "dont_allow",
        }
    }
}

/// A request to generate a video. Immutable once submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The text prompt describing the desired video
    pub prompt: String,
    /// Requested duration in seconds
    pub duration_secs: u32,
    /// Target aspect ratio
    pub aspect_ratio: AspectRatio,
    /// Person-depiction policy
    pub person_generation: PersonGeneration,
}

impl GenerationRequest {
    /// Creates a new request with the given prompt and default settings.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            duration_secs: 8,
            aspect_ratio: AspectRatio::default(),
            person_generation: PersonGeneration::default(),
        }
    }

    /// Sets the requested duration in seconds.
    pub fn with_duration(mut self, secs: u32) -> Self {
        self.duration_secs = secs;
        self
    }

    /// Sets the aspect ratio.
    pub fn with_aspect_ratio(mut self, ratio: AspectRatio) -> Self {
        self.aspect_ratio = ratio;
        self
    }

    /// Sets the person-depiction policy.
    pub fn with_person_generation(mut self, policy: PersonGeneration) -> Self {
        self.person_generation = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder_chain() {
        let req = GenerationRequest::new("Ocean at dusk")
            .with_duration(6)
            .with_aspect_ratio(AspectRatio::Portrait)
            .with_person_generation(PersonGeneration::DontAllow);

        assert_eq!(req.prompt, "Ocean at dusk");
        assert_eq!(req.duration_secs, 6);
        assert_eq!(req.aspect_ratio, AspectRatio::Portrait);
        assert_eq!(req.person_generation, PersonGeneration::DontAllow);
    }

    #[test]
    fn test_aspect_ratio_serializes_as_ratio_string() {
        let json = serde_json::to_string(&AspectRatio::Widescreen).unwrap();
        assert_eq!(json, "\"16:9\"");
    }

    #[test]
    fn test_person_generation_str() {
        assert_eq!(PersonGeneration::AllowAdult.as_str(), "allow_adult");
    }
}
