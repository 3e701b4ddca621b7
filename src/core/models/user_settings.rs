use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::global_constants;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Dark,
    #[default]
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub access_key: Option<String>,
}

fn default_api_base_url() -> String {
    global_constants::UNSPLASH_API_URL.to_string()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            theme_mode: ThemeMode::default(),
            access_key: None,
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from_path(&settings_path)
    }

    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!(
                "[SETTINGS] No settings file at {:?}, using defaults",
                settings_path
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] API base URL: {}", settings.api_base_url);
        log::debug!("[SETTINGS] Theme mode: {}", settings.theme_mode);

        Ok(settings)
    }

    /// Picks the access key, preferring the environment over the settings file.
    /// Blank values count as absent.
    pub fn resolve_access_key(&self, environment_value: Option<String>) -> Option<String> {
        environment_value
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                self.access_key
                    .clone()
                    .filter(|key| !key.trim().is_empty())
            })
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
