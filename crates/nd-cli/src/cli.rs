//! CLI configuration and settings management

use crate::logging::{LogFormat, LogLevel};
use crate::{CliError, Result};
use nd_core::NamedEntity;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name given to the entity when neither the config nor `--name` sets one.
pub const DEFAULT_ENTITY_NAME: &str = "chinese";

/// CLI configuration loaded from an optional TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// The entity every scenario constructs
    pub entity: EntityConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityConfig {
    /// Display name, stored verbatim
    pub name: String,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_ENTITY_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no command-line flag picks one
    pub level: Option<LogLevel>,

    /// Log output format used when no command-line flag picks one
    pub format: Option<LogFormat>,
}

impl CliConfig {
    /// Load configuration from `config_path`, or fall back to defaults.
    ///
    /// Without an explicit path nothing is read from disk.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            CliError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CliError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| CliError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Replace the configured entity name when `name` is given.
    pub fn with_name(mut self, name: Option<String>) -> Self {
        if let Some(name) = name {
            self.entity.name = name;
        }
        self
    }

    /// Build the entity described by this configuration.
    pub fn entity(&self) -> NamedEntity {
        NamedEntity::new(self.entity.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_core::NameProvider;
    use pretty_assertions::assert_eq;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_default_config() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.entity().get_name(), "chinese");
        assert_eq!(config.logging.level, None);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: CliConfig = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.entity.name, DEFAULT_ENTITY_NAME);
        assert_eq!(config.logging.level, Some(LogLevel::Debug));
        assert_eq!(config.logging.format, None);
    }

    #[test]
    fn test_config_file_operations() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("namedyn.toml");
        let config = CliConfig::default().with_name(Some("中文".to_string()));

        config.save_to_file(&path).unwrap();
        let loaded = CliConfig::load(Some(&path)).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.entity().get_name(), "中文");
    }

    #[test]
    fn test_empty_name_is_kept() {
        let config = CliConfig::default().with_name(Some(String::new()));
        assert_eq!(config.entity().get_name(), "");
        let config = config.with_name(None);
        assert_eq!(config.entity.name, "");
    }

    #[test]
    fn test_bad_config_is_reported() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "entity = 3").unwrap();
        let err = CliConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Config(ref msg) if msg.starts_with("Failed to parse")));

        let err = CliConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, CliError::Config(ref msg) if msg.starts_with("Failed to read")));
    }
}
