use std::io;
use std::path::{Path, PathBuf};

use super::paths::get_config_dir;
use crate::kernel::services::ports::settings::Settings;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to access settings {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(SETTINGS_FILE))
}

/// Write default settings at `path` unless something is already there.
pub fn ensure_settings_file(path: &Path) -> Result<(), SettingsError> {
    let io_err = |source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&Settings::default()).map_err(|source| {
            SettingsError::Json {
                path: path.to_path_buf(),
                source,
            }
        })?;
        std::fs::write(path, content).map_err(io_err)?;
    }
    Ok(())
}

/// `Ok(None)` when there is no settings file.
pub fn load_settings(path: &Path) -> Result<Option<Settings>, SettingsError> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(&data)
        .map(Some)
        .map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
