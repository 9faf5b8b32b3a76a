//! Content snippet provider.
//!
//! Fetches theme-keyed marketing snippets from a remote content store, with a
//! deterministic static fallback so callers always get usable content. This
//! boundary never surfaces an error: a single remote attempt is made and any
//! failure falls back to the static table.

mod fallback;
mod store;

pub use fallback::fallback_snippets;
pub use store::{ContentConfig, ContentError, SnippetStore};
