//! Static fallback snippet table.

use promoreel_models::{ContentSnippet, ThemeDescriptor, ThemeId};

/// Deterministic fallback snippets for a theme.
///
/// Unknown theme ids resolve to the default theme's list, so this never
/// returns an empty vector. Repeated calls for the same theme return
/// identical data.
pub fn fallback_snippets(theme: &ThemeId) -> Vec<ContentSnippet> {
    let descriptor = ThemeDescriptor::resolve(theme);
    match descriptor.id.as_str() {
        "efficacy" => vec![
            ContentSnippet::new(
                "efficacy-01",
                "Primary endpoint",
                "Met its primary endpoint in two phase 3 trials with statistically significant improvement over placebo",
                "Evidence",
            ),
            ContentSnippet::new(
                "efficacy-02",
                "Onset of action",
                "Measurable symptom relief observed as early as week two",
                "Evidence",
            ),
            ContentSnippet::new(
                "efficacy-03",
                "Durability",
                "Response sustained through 52 weeks of continuous treatment",
                "Evidence",
            ),
        ],
        "brand" => vec![
            ContentSnippet::new(
                "brand-01",
                "Heritage",
                "Backed by three decades of research in chronic care",
                "Brand",
            ),
            ContentSnippet::new(
                "brand-02",
                "Trust",
                "The most prescribed therapy in its class for five consecutive years",
                "Brand",
            ),
        ],
        "mechanism" => vec![
            ContentSnippet::new(
                "mechanism-01",
                "Targeted action",
                "Selectively modulates the receptor pathway driving inflammation",
                "Solution",
            ),
            ContentSnippet::new(
                "mechanism-02",
                "Once daily",
                "Once-daily oral dosing with steady plasma levels across 24 hours",
                "Solution",
            ),
            ContentSnippet::new(
                "mechanism-03",
                "Root cause",
                "Acts at the source of the condition rather than masking symptoms",
                "Solution",
            ),
        ],
        "patient" => vec![
            ContentSnippet::new(
                "patient-01",
                "Daily life",
                "Patients report returning to walking, gardening and playing with grandchildren",
                "Insight",
            ),
            ContentSnippet::new(
                "patient-02",
                "Independence",
                "Nine out of ten surveyed patients felt more independent after three months",
                "Insight",
            ),
        ],
        // "safety" and every unknown theme
        _ => vec![
            ContentSnippet::new(
                "safety-01",
                "Tolerability",
                "Well tolerated in clinical trials with discontinuation rates comparable to placebo",
                "Safety",
            ),
            ContentSnippet::new(
                "safety-02",
                "Long-term data",
                "Five years of post-marketing surveillance with a consistent safety profile",
                "Safety",
            ),
            ContentSnippet::new(
                "safety-03",
                "Drug interactions",
                "No clinically meaningful interactions with common cardiovascular medications",
                "Safety",
            ),
            ContentSnippet::new(
                "safety-04",
                "Monitoring",
                "No routine laboratory monitoring required during maintenance therapy",
                "Safety",
            ),
            ContentSnippet::new(
                "safety-05",
                "Older adults",
                "No dose adjustment needed for patients over 65",
                "Safety",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_never_empty_for_any_theme() {
        for id in ["safety", "efficacy", "brand", "mechanism", "patient", "bogus", ""] {
            let snippets = fallback_snippets(&ThemeId::from(id));
            assert!(!snippets.is_empty(), "empty fallback for theme {id:?}");
            assert!(snippets.len() >= 2 && snippets.len() <= 5);
        }
    }

    #[test]
    fn test_unknown_theme_uses_default_list() {
        let unknown = fallback_snippets(&ThemeId::from("does-not-exist"));
        let default = fallback_snippets(&ThemeId::from("safety"));
        assert_eq!(unknown, default);
        assert_eq!(default.len(), 5);
    }

    #[test]
    fn test_fallback_is_idempotent() {
        let a = fallback_snippets(&ThemeId::from("mechanism"));
        let b = fallback_snippets(&ThemeId::from("mechanism"));
        assert_eq!(a, b);
    }
}
