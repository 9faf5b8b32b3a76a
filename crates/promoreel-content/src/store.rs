//! Remote snippet store client.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use promoreel_models::{ContentSnippet, ThemeDescriptor, ThemeId};

use crate::fallback::fallback_snippets;

/// Content store configuration.
#[derive(Debug, Clone, Default)]
pub struct ContentConfig {
    /// Base URL of the content store; `None` means fallback-only operation.
    pub base_url: Option<String>,
}

impl ContentConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("CONTENT_STORE_URL").ok().filter(|s| !s.is_empty()),
        }
    }

    /// Config pointing at a specific store.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
        }
    }
}

/// Errors from the remote store. Internal to this crate's fetch path; the
/// public API swallows them in favor of the static fallback.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content store request failed: {0}")]
    Request(String),

    #[error("content store returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("failed to decode content rows: {0}")]
    Decode(String),

    #[error("content store returned no rows")]
    Empty,
}

/// One row from the content store.
#[derive(Debug, Deserialize)]
struct SnippetRow {
    id: String,
    name: String,
    description: String,
    section: String,
}

impl From<SnippetRow> for ContentSnippet {
    fn from(row: SnippetRow) -> Self {
        ContentSnippet::new(row.id, row.name, row.description, row.section)
    }
}

/// Snippet provider: one remote attempt, then static fallback.
pub struct SnippetStore {
    config: ContentConfig,
    client: Client,
}

impl SnippetStore {
    /// Create a new store client.
    pub fn new(config: ContentConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Fallback-only store with no remote endpoint.
    pub fn offline() -> Self {
        Self::new(ContentConfig::default())
    }

    /// Fetch snippets for a theme.
    ///
    /// Never fails: a single remote attempt is made when a store is
    /// configured, and any transport, status, decode or empty-result problem
    /// falls back to the deterministic static table for the theme.
    pub async fn fetch_snippets(&self, theme: &ThemeId) -> Vec<ContentSnippet> {
        let descriptor = ThemeDescriptor::resolve(theme);

        if self.config.base_url.is_some() {
            match self.fetch_remote(&descriptor).await {
                Ok(snippets) => {
                    debug!(
                        theme = %descriptor.id,
                        count = snippets.len(),
                        "fetched snippets from content store"
                    );
                    return snippets;
                }
                Err(e) => {
                    warn!(theme = %descriptor.id, "content store fetch failed, using fallback: {e}");
                }
            }
        }

        fallback_snippets(&descriptor.id)
    }

    async fn fetch_remote(
        &self,
        theme: &ThemeDescriptor,
    ) -> Result<Vec<ContentSnippet>, ContentError> {
        // Caller only enters here with a configured base_url.
        let base = self.config.base_url.as_deref().unwrap_or_default();
        let url = format!("{}/snippets", base.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(&[("section", theme.section.as_str())])
            .send()
            .await
            .map_err(|e| ContentError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ContentError::Api { status, body });
        }

        let rows: Vec<SnippetRow> = response
            .json()
            .await
            .map_err(|e| ContentError::Decode(e.to_string()))?;

        if rows.is_empty() {
            return Err(ContentError::Empty);
        }

        Ok(rows.into_iter().map(ContentSnippet::from).collect())
    }
}
