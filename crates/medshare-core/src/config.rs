use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::MedshareError;

/// User configuration loaded from `~/.config/medshare/config.toml`.
///
/// All fields have defaults so the config file is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_placeholder() -> String {
    "No medicines found - try a different search term".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            placeholder: default_placeholder(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, MedshareError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path, falling back to defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, MedshareError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| MedshareError::ConfigRead {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        toml::from_str(&content).map_err(|e| MedshareError::ConfigRead {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }

    pub fn config_path() -> Result<PathBuf, MedshareError> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    pub fn catalog_path(&self) -> Result<PathBuf, MedshareError> {
        match &self.catalog_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::project_dirs()?.data_dir().join("catalog.toml")),
        }
    }

    fn project_dirs() -> Result<ProjectDirs, MedshareError> {
        ProjectDirs::from("", "", "medshare").ok_or(MedshareError::NoProjectDirs)
    }
}
