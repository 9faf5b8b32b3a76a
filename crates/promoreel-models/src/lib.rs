//! Shared data models for the PromoReel pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - The static theme catalog and content snippets
//! - Video scripts with timed scenes
//! - Generation requests and results
//! - The pipeline status state machine

pub mod asset;
pub mod request;
pub mod result;
pub mod script;
pub mod snippet;
pub mod status;
pub mod theme;

// Re-export common types
pub use asset::MaterializedAsset;
pub use request::{AspectRatio, GenerationRequest, PersonGeneration};
pub use result::{GenerationRecord, GenerationResult, OperationHandle, VideoHandle};
pub use script::{Scene, ScriptValidationError, VideoScript};
pub use snippet::ContentSnippet;
pub use status::GenerationStatus;
pub use theme::{ThemeDescriptor, ThemeId, DEFAULT_THEME};
