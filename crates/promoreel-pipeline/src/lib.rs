//! Generation status controller.
//!
//! Sequences one generation run end to end: content snippets → script →
//! video submission/polling → asset materialization, while exposing a single
//! [`GenerationStatus`] plus the latest error, script, result and asset to a
//! presentation layer. Any error that escapes the individual steps is caught
//! at the top of the sequence and folded into the `Error` status.

mod coordinator;

pub use coordinator::{Coordinator, ScriptMode};
