// src/preferences.rs - User preferences persisted as TOML

use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};
use crate::persistence;

pub const DEFAULT_FONT_SIZE: u16 = 12;
pub const MIN_FONT_SIZE: u16 = 6;
pub const MAX_FONT_SIZE: u16 = 72;

/// Missing keys fall back to their defaults and unknown keys are ignored, so
/// files written by newer or older versions still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub font_size: u16,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl Preferences {
    pub fn with_font_size(self, size: u16) -> Result<Self> {
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
            return Err(EditorError::InvalidFontSize {
                size,
                min: MIN_FONT_SIZE,
                max: MAX_FONT_SIZE,
            });
        }
        let mut prefs = self;
        prefs.font_size = size;
        Ok(prefs)
    }
}

pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Never fails: unreadable, malformed or out-of-range settings yield defaults.
    pub fn load(&self) -> Preferences {
        let text = match persistence::load(&self.path) {
            Ok(text) => text,
            Err(e) => {
                if self.path.exists() {
                    warn!("using default preferences: {e}");
                } else {
                    debug!("no preferences at {}", self.path.display());
                }
                return Preferences::default();
            }
        };

        let prefs: Preferences = match toml::from_str(&text) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!(
                    "using default preferences, {} is malformed: {e}",
                    self.path.display()
                );
                return Preferences::default();
            }
        };

        Preferences::default()
            .with_font_size(prefs.font_size)
            .unwrap_or_else(|e| {
                warn!("{e}; using {DEFAULT_FONT_SIZE}");
                Preferences::default()
            })
    }

    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        let text = toml::to_string(prefs)?;
        persistence::save(&self.path, &text)
    }
}
