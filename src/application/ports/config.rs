//! Configuration port interface

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for persisted export settings
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load settings. A missing file yields an empty config, not an error.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist settings, creating parent directories as needed.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the settings file.
    fn path(&self) -> PathBuf;

    /// Whether the settings file exists.
    fn exists(&self) -> bool;

    /// Write the default settings. Fails if the file already exists.
    async fn init(&self) -> Result<(), ConfigError>;
}
