use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::autosave::DEFAULT_AUTO_SAVE_INTERVAL;
use crate::error::{EditorError, Result};

/// Shell settings read from `config.toml`. Unlike preferences these are
/// only ever edited by hand.
#[derive(Debug, Default, Deserialize)]
pub struct NotepadConfig {
    pub auto_save: Option<bool>,
    pub auto_save_interval_secs: Option<u64>,
}

impl NotepadConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| EditorError::io(path, e))?;

        let config: NotepadConfig = toml::from_str(&content).map_err(|source| {
            EditorError::Config {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Ok(config)
    }

    pub fn auto_save_enabled(&self) -> bool {
        self.auto_save.unwrap_or(false)
    }

    /// Zero is treated as unset.
    pub fn auto_save_interval(&self) -> Duration {
        self.auto_save_interval_secs
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_AUTO_SAVE_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = NotepadConfig::default();
        assert!(!config.auto_save_enabled());
        assert_eq!(config.auto_save_interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "auto_save = true\nauto_save_interval_secs = 30\n").unwrap();
        let config = NotepadConfig::from_file(&path).unwrap();
        assert!(config.auto_save_enabled());
        assert_eq!(config.auto_save_interval(), Duration::from_secs(30));
    }

    #[test]
    fn test_zero_interval_uses_default() {
        let config = NotepadConfig {
            auto_save: Some(true),
            auto_save_interval_secs: Some(0),
        };
        assert_eq!(config.auto_save_interval(), DEFAULT_AUTO_SAVE_INTERVAL);
    }

    #[test]
    fn test_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "auto_save = \"sometimes\"").unwrap();
        assert!(matches!(
            NotepadConfig::from_file(&path),
            Err(EditorError::Config { .. })
        ));
        assert!(matches!(
            NotepadConfig::from_file(&dir.path().join("missing.toml")),
            Err(EditorError::Io { .. })
        ));
    }
}
