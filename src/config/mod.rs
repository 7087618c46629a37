use crate::errors::{AppError, AppResult};
use crate::store::csv_file;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_storage")]
    pub storage: String,
    #[serde(default = "default_subject_width")]
    pub subject_width: usize,
}

fn default_storage() -> String {
    Config::storage_file().to_string_lossy().to_string()
}
fn default_subject_width() -> usize {
    15
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            subject_width: default_subject_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("studytracker")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".studytracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("studytracker.conf")
    }

    /// Return the default path of the storage file
    pub fn storage_file() -> PathBuf {
        Self::config_dir().join("StudyTracker.csv")
    }

    /// Storage path with `~/` expanded.
    pub fn storage_path(&self) -> PathBuf {
        expand_tilde(&self.storage)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize configuration and storage files
    pub fn init_all(custom_storage: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();

        // Storage path: user provided or default
        let storage_path = match custom_storage {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::storage_file(),
        };

        let config = Config {
            storage: storage_path.to_string_lossy().to_string(),
            subject_width: default_subject_width(),
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            fs::write(Self::config_file(), config.to_yaml()?).map_err(|_| AppError::ConfigSave)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = storage_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        csv_file::ensure_exists(&storage_path)?;

        success(format!("Storage:     {}", storage_path.display()));

        Ok(())
    }
}
