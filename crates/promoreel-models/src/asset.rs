//! Materialized playable assets.

use base64::Engine;
use std::path::Path;

/// A downloaded, locally playable video artifact.
///
/// Produced by the pipeline's materialize step after a completed generation.
/// This is a transient, session-scoped resource: it is dropped (released)
/// when a new generation sequence begins or the result is discarded.
#[derive(Debug, Clone)]
#[must_use = "materialized asset should be saved or displayed"]
pub struct MaterializedAsset {
    /// Raw video bytes
    pub data: Vec<u8>,
    /// MIME type (e.g. "video/mp4")
    pub mime_type: String,
    /// Provider uri the bytes were fetched from (without credentials)
    pub source_uri: String,
}

impl MaterializedAsset {
    /// Create a new materialized asset.
    pub fn new(
        data: Vec<u8>,
        mime_type: impl Into<String>,
        source_uri: impl Into<String>,
    ) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
            source_uri: source_uri.into(),
        }
    }

    /// Size of the video data in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Save the video to the given path.
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        std::fs::write(path, &self.data)
    }

    /// Return the video as a data URL for direct embedding.
    pub fn to_data_url(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.data);
        format!("data:{};base64,{}", self.mime_type, encoded)
    }
}
