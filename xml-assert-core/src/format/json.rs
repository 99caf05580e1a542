use crate::diff::result::Difference;

/// Format differences as JSON.
pub fn format_json(differences: &[Difference]) -> String {
    serde_json::to_string_pretty(differences).unwrap_or_else(|_| "[]".to_string())
}
