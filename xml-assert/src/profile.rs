use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use xml_assert_core::CompareConfig;

/// Comparison switches loaded from a TOML profile.
///
/// Missing keys fall back to the legacy defaults: everything ignorable is
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssertProfile {
    pub ignore_empty_nodes: bool,
    pub ignore_namespace_prefixes: bool,
    pub ignore_child_order: bool,
}

impl Default for AssertProfile {
    fn default() -> Self {
        Self {
            ignore_empty_nodes: true,
            ignore_namespace_prefixes: true,
            ignore_child_order: true,
        }
    }
}

impl From<AssertProfile> for CompareConfig {
    fn from(profile: AssertProfile) -> Self {
        CompareConfig {
            ignore_empty_nodes: profile.ignore_empty_nodes,
            ignore_namespace_prefixes: profile.ignore_namespace_prefixes,
            ignore_child_order: profile.ignore_child_order,
        }
    }
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse profile: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load an [`AssertProfile`] from a TOML file.
pub fn load_profile(path: &Path) -> Result<AssertProfile, ProfileError> {
    let raw = fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{load_profile, AssertProfile};

    #[test]
    fn missing_keys_take_legacy_defaults() {
        let profile: AssertProfile =
            toml::from_str("ignore_child_order = false").expect("parse profile");
        assert!(profile.ignore_empty_nodes);
        assert!(profile.ignore_namespace_prefixes);
        assert!(!profile.ignore_child_order);
    }

    #[test]
    fn loads_profile_from_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("strict.toml");
        fs::write(
            &path,
            "ignore_empty_nodes = false\nignore_namespace_prefixes = false\nignore_child_order = false\n",
        )
        .expect("write profile");

        let profile = load_profile(&path).expect("load profile");
        assert_eq!(
            profile,
            AssertProfile {
                ignore_empty_nodes: false,
                ignore_namespace_prefixes: false,
                ignore_child_order: false,
            }
        );
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "ignore_child_order = maybe").expect("write profile");

        assert!(load_profile(&path).is_err());
    }
}
