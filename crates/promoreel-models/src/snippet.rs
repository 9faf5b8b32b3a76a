//! Content snippet model.

use serde::{Deserialize, Serialize};

/// A single piece of reusable marketing content tied to a theme.
///
/// Snippets are fetched fresh per theme selection and never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSnippet {
    /// Stable snippet identifier
    pub id: String,
    /// Short display name
    pub name: String,
    /// Free-text content used in script prompts
    pub content: String,
    /// Category label (mirrors the content-store section)
    pub category: String,
}

impl ContentSnippet {
    /// Create a new snippet.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content: content.into(),
            category: category.into(),
        }
    }
}
