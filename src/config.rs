// Configuration for the analysis framework
// Loaded from <config_dir>/dialectics/config.json when present

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{DialecticsError, Result};
use crate::models::Perspective;

/// Parameters controlling how an analysis is generated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialecticalParameters {
    /// How many antithesis perspectives to generate, in fixed order
    pub perspective_count: usize,
    /// Produce λ-transformed perspectives before synthesis
    pub enable_meta_cognition: bool,
}

impl Default for DialecticalParameters {
    fn default() -> Self {
        Self {
            perspective_count: Perspective::ALL.len(),
            enable_meta_cognition: true,
        }
    }
}

impl DialecticalParameters {
    pub fn validate(&self) -> Result<()> {
        let max = Perspective::ALL.len();
        if self.perspective_count == 0 || self.perspective_count > max {
            return Err(DialecticsError::Config(format!(
                "perspective_count must be between 1 and {}, got {}",
                max, self.perspective_count
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub parameters: DialecticalParameters,
}

impl Settings {
    /// Load from an explicit path; the file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.parameters.validate()?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from the default location, falling back to defaults when no
    /// config file exists.
    pub fn load() -> Result<Self> {
        match Self::config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|dir| dir.join("dialectics").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let params = DialecticalParameters::default();
        assert_eq!(params.perspective_count, 5);
        assert!(params.enable_meta_cognition);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let zero = DialecticalParameters {
            perspective_count: 0,
            ..Default::default()
        };
        assert!(matches!(zero.validate(), Err(DialecticsError::Config(_))));

        let six = DialecticalParameters {
            perspective_count: 6,
            ..Default::default()
        };
        assert!(six.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let settings = Settings {
            parameters: DialecticalParameters {
                perspective_count: 3,
                enable_meta_cognition: false,
            },
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"parameters": {"perspective_count": 2}}"#).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.parameters.perspective_count, 2);
        assert!(loaded.parameters.enable_meta_cognition);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        fs::write(&path, r#"{"parameters": {"perspective_count": 9}}"#).unwrap();
        assert!(matches!(Settings::load_from(&path), Err(DialecticsError::Config(_))));

        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(DialecticsError::Serialization(_))
        ));

        assert!(matches!(
            Settings::load_from(&dir.path().join("missing.json")),
            Err(DialecticsError::Io(_))
        ));
    }
}
