//! Theme catalog definitions.
//!
//! Themes are the fixed set of marketing angles a user can pick from. Each
//! theme maps to a content-store section label used when querying snippets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Theme id used when a requested theme is unknown.
pub const DEFAULT_THEME: &str = "safety";

/// Identifier for a marketing theme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeId(pub String);

impl ThemeId {
    /// Create from an existing string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ThemeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A marketing theme from the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDescriptor {
    /// Theme identifier (lowercase, stable)
    pub id: ThemeId,
    /// Display name
    pub name: String,
    /// One-line description fed to the script generator
    pub description: String,
    /// Content-store section this theme draws snippets from
    pub section: String,
}

impl ThemeDescriptor {
    fn new(id: &str, name: &str, description: &str, section: &str) -> Self {
        Self {
            id: ThemeId::new(id),
            name: name.to_string(),
            description: description.to_string(),
            section: section.to_string(),
        }
    }

    /// The full static theme catalog, defined at process start.
    pub fn catalog() -> Vec<ThemeDescriptor> {
        vec![
            ThemeDescriptor::new(
                "safety",
                "Safety",
                "A well-characterized safety and tolerability profile patients can trust",
                "Safety",
            ),
            ThemeDescriptor::new(
                "efficacy",
                "Efficacy",
                "Clinically demonstrated outcomes backed by trial evidence",
                "Evidence",
            ),
            ThemeDescriptor::new(
                "brand",
                "Brand",
                "A trusted name with a consistent record of quality",
                "Brand",
            ),
            ThemeDescriptor::new(
                "mechanism",
                "Mechanism of Action",
                "How the therapy works at the source of the condition",
                "Solution",
            ),
            ThemeDescriptor::new(
                "patient",
                "Patient Stories",
                "Real experiences from people living better with treatment",
                "Insight",
            ),
        ]
    }

    /// Resolve a theme id against the catalog.
    ///
    /// Lookup is case-insensitive. Unknown ids resolve to the default theme
    /// so downstream steps always have a usable descriptor.
    pub fn resolve(id: &ThemeId) -> ThemeDescriptor {
        let wanted = id.as_str().to_ascii_lowercase();
        let mut catalog = Self::catalog();
        if let Some(pos) = catalog.iter().position(|t| t.id.as_str() == wanted) {
            return catalog.swap_remove(pos);
        }
        // The default theme is the first catalog entry.
        catalog.swap_remove(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_fixed_sections() {
        let sections: Vec<(String, String)> = ThemeDescriptor::catalog()
            .into_iter()
            .map(|t| (t.id.to_string(), t.section))
            .collect();

        assert_eq!(
            sections,
            vec![
                ("safety".to_string(), "Safety".to_string()),
                ("efficacy".to_string(), "Evidence".to_string()),
                ("brand".to_string(), "Brand".to_string()),
                ("mechanism".to_string(), "Solution".to_string()),
                ("patient".to_string(), "Insight".to_string()),
            ]
        );
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let theme = ThemeDescriptor::resolve(&ThemeId::from("Efficacy"));
        assert_eq!(theme.id.as_str(), "efficacy");
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_default() {
        let theme = ThemeDescriptor::resolve(&ThemeId::from("nonsense"));
        assert_eq!(theme.id.as_str(), DEFAULT_THEME);
    }
}
