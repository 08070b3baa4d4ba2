use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Dialog behaviour the host can tune from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogSettings {
    /// Highlight invalid fields as soon as a stored config is loaded.
    pub validate_on_load: bool,
    /// Where the file picker opens before anything has been browsed.
    pub default_location: Option<PathBuf>,
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            validate_on_load: true,
            default_location: None,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl DialogSettings {
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let settings = DialogSettings::from_toml_str("default_location = \"/data\"\n").unwrap();
        assert!(settings.validate_on_load);
        assert_eq!(settings.default_location, Some(PathBuf::from("/data")));
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(
            DialogSettings::from_toml_str("").unwrap(),
            DialogSettings::default()
        );
    }

    #[test]
    fn bad_types_are_rejected() {
        let err = DialogSettings::from_toml_str("validate_on_load = \"yes\"").unwrap_err();
        assert!(matches!(err, SettingsError::Toml(_)));
    }
}
