use crate::error::{Result, RevzError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const SETTINGS_FILENAME: &str = "settings.json";

/// User settings, stored in `settings.json` next to the store file.
///
/// The flag itself is consumed by display front-ends; this layer only
/// reads and writes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_dark")]
    pub dark: bool,
}

fn default_dark() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self { dark: true }
    }
}

impl Settings {
    /// Load settings from the given directory, or return defaults if the
    /// file is not there yet.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(SETTINGS_FILENAME);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(RevzError::Io)?;
        let settings: Settings =
            serde_json::from_str(&content).map_err(RevzError::Serialization)?;
        Ok(settings)
    }

    /// Save settings to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();

        if !dir.exists() {
            fs::create_dir_all(dir).map_err(RevzError::Io)?;
        }

        let path = dir.join(SETTINGS_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RevzError::Serialization)?;
        fs::write(path, content).map_err(RevzError::Io)?;
        Ok(())
    }

    pub fn file_name() -> &'static str {
        SETTINGS_FILENAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_to_dark() {
        assert!(Settings::default().dark);
    }

    #[test]
    fn load_missing_settings_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_and_load() {
        let dir = tempdir().unwrap();

        let settings = Settings { dark: false };
        settings.save(dir.path()).unwrap();

        let loaded = Settings::load(dir.path()).unwrap();
        assert!(!loaded.dark);
    }

    #[test]
    fn missing_field_falls_back_to_default() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILENAME), "{}").unwrap();

        let loaded = Settings::load(dir.path()).unwrap();
        assert!(loaded.dark);
    }
}
