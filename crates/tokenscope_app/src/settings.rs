use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;
use tokenscope_core::TokenView;
use tokenscope_engine::ModelKey;
use tokenscope_logging::{scope_info, scope_warn};

pub const DEFAULT_SETTINGS_FILE: &str = ".tokenscope.ron";
pub const DEFAULT_DELAY_MS: u64 = 200;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub model: ModelKey,
    pub view: TokenView,
    pub delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: ModelKey::default(),
            view: TokenView::default(),
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl Settings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Loads settings, falling back to defaults when the file is missing or unreadable.
pub fn load_settings(path: &Path) -> Settings {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Settings::default();
        }
        Err(err) => {
            scope_warn!("Failed to read settings from {:?}: {}", path, err);
            return Settings::default();
        }
    };

    match ron::from_str(&content) {
        Ok(settings) => {
            scope_info!("Loaded settings from {:?}", path);
            settings
        }
        Err(err) => {
            scope_warn!("Failed to parse settings from {:?}: {}", path, err);
            Settings::default()
        }
    }
}

/// Writes settings through a temp file in the same directory, then renames it into place.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    let pretty = ron::ser::PrettyConfig::new();
    let content = ron::ser::to_string_pretty(settings, pretty)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(path).map_err(|e| SettingsError::Io(e.error))?;

    scope_info!("Saved settings to {:?}", path);
    Ok(())
}
