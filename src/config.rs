//! Backend configuration
//!
//! Resolves where the attribute type store lives. The host normally calls
//! [`AppConfig::from_env`] once at startup.

use crate::error::{VaultError, VaultResult};
use std::path::{Path, PathBuf};

/// Directory under the user's home holding all Config Vault data
pub const DATA_DIR_NAME: &str = ".config-vault";

/// File name of the attribute type store
pub const ATTRIBUTE_TYPES_FILE: &str = "attribute_types.json";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "CONFIG_VAULT_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub attribute_types_file: String,
}

impl AppConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            attribute_types_file: ATTRIBUTE_TYPES_FILE.to_string(),
        }
    }

    /// `<home>/.config-vault`
    pub fn from_home() -> VaultResult<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            VaultError::ConfigError("Failed to get user home directory".to_string())
        })?;
        Ok(Self::new(home_dir.join(DATA_DIR_NAME)))
    }

    /// Honors `CONFIG_VAULT_DATA_DIR` when set, otherwise [`AppConfig::from_home`]
    pub fn from_env() -> VaultResult<Self> {
        match std::env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => Ok(Self::new(dir)),
            _ => Self::from_home(),
        }
    }

    pub fn with_attribute_types_file(mut self, file_name: impl Into<String>) -> Self {
        self.attribute_types_file = file_name.into();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn attribute_types_path(&self) -> PathBuf {
        self.data_dir.join(&self.attribute_types_file)
    }
}
