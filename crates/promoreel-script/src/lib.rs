//! Gemini-backed script generator.
//!
//! Builds a structured text-generation request from a theme and its content
//! snippets, asks for a JSON-typed response at a fixed low temperature, and
//! parses the reply strictly into a [`promoreel_models::VideoScript`].
//! Unlike the content provider, failures here propagate to the caller.

mod error;
mod generator;
mod prompt;

pub use error::{ScriptError, ScriptResult};
pub use generator::{ScriptConfig, ScriptGenerator};
pub use prompt::{build_script_prompt, SCRIPT_SYSTEM_PROMPT};
