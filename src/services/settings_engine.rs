// Seedbrowser settings engine
// Session settings live in one JSON file under the platform config directory
// (or an explicit override path). Sections missing from the file fall back
// to their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::SessionSettings;

pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<SessionSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &SessionSettings;
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

pub struct SettingsEngine {
    config_path: String,
    settings: SessionSettings,
}

impl SettingsEngine {
    /// `path_override` wins; otherwise `<config dir>/settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override.unwrap_or_else(|| {
            let default: PathBuf = platform::get_config_dir().join("settings.json");
            default.to_string_lossy().into_owned()
        });
        Self {
            config_path,
            settings: SessionSettings::default(),
        }
    }

    /// `"downloads.allowed_extension"` → `"/downloads/allowed_extension"`.
    fn pointer_for(key: &str) -> Result<String, SettingsError> {
        if key.is_empty() || key.split('.').any(str::is_empty) {
            return Err(SettingsError::InvalidKey(format!("malformed key '{}'", key)));
        }
        Ok(format!("/{}", key.replace('.', "/")))
    }
}

impl SettingsEngineTrait for SettingsEngine {
    fn load(&mut self) -> Result<SessionSettings, SettingsError> {
        let path = Path::new(&self.config_path);
        self.settings = if path.exists() {
            let raw = fs::read_to_string(path)
                .map_err(|e| SettingsError::IoError(format!("reading {}: {}", self.config_path, e)))?;
            serde_json::from_str(&raw).map_err(|e| {
                SettingsError::SerializationError(format!("parsing {}: {}", self.config_path, e))
            })?
        } else {
            tracing::debug!(path = %self.config_path, "no settings file, using defaults");
            SessionSettings::default()
        };
        Ok(self.settings.clone())
    }

    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| SettingsError::IoError(format!("creating {}: {}", dir.display(), e)))?;
        }
        let body = serde_json::to_string_pretty(&self.settings)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
        fs::write(path, body)
            .map_err(|e| SettingsError::IoError(format!("writing {}: {}", self.config_path, e)))
    }

    fn get_settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Replaces one leaf addressed by a dot path, e.g. `"overlay.animation_ms"`,
    /// then saves. Only existing keys can be set and the result must still
    /// deserialize; on error the settings are unchanged.
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        let pointer = Self::pointer_for(key)?;
        let mut tree = serde_json::to_value(&self.settings)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;

        let slot = tree
            .pointer_mut(&pointer)
            .ok_or_else(|| SettingsError::InvalidKey(format!("unknown key '{}'", key)))?;
        *slot = value;

        self.settings = serde_json::from_value(tree)
            .map_err(|e| SettingsError::InvalidValue(format!("{}: {}", key, e)))?;
        tracing::debug!(%key, "setting updated");
        self.save()
    }

    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = SessionSettings::default();
        self.save()
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
