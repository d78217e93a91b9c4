// File: src/config.rs
// Purpose: Mount configuration, loadable from a TOML file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What to do with default values for variables the pattern never declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnusedDefaults {
    /// Keep the mount; the extra defaults are never consulted
    #[default]
    Ignore,
    /// Fail construction with `MountError::UnusedDefaults`
    Reject,
}

/// Options applied when compiling and rendering a mount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountConfig {
    #[serde(default)]
    pub unused_defaults: UnusedDefaults,

    /// Whether rendered paths always end with `/`
    #[serde(default = "default_false")]
    pub trailing_slash: bool,
}

fn default_false() -> bool {
    false
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            unused_defaults: UnusedDefaults::Ignore,
            trailing_slash: false,
        }
    }
}

impl MountConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read mount config: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse mount config: {:?}", path))
    }

    /// Parse configuration from TOML source
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MountConfig::default();
        assert_eq!(config.unused_defaults, UnusedDefaults::Ignore);
        assert!(!config.trailing_slash);
    }

    #[test]
    fn test_parse_full_config() {
        let config = MountConfig::from_toml_str(
            r#"
            unused_defaults = "reject"
            trailing_slash = true
            "#,
        )
        .unwrap();
        assert_eq!(config.unused_defaults, UnusedDefaults::Reject);
        assert!(config.trailing_slash);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = MountConfig::from_toml_str("trailing_slash = true").unwrap();
        assert_eq!(config.unused_defaults, UnusedDefaults::Ignore);
        assert!(config.trailing_slash);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(MountConfig::from_toml_str("  \n").unwrap(), MountConfig::default());
    }

    #[test]
    fn test_invalid_policy_rejected() {
        assert!(MountConfig::from_toml_str(r#"unused_defaults = "explode""#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let config = MountConfig::load("does-not-exist/rhtmx-mount.toml").unwrap();
        assert_eq!(config, MountConfig::default());
    }
}
