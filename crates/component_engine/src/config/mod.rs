//! Configuration system
//!
//! Engine settings are plain serde structures that load from and save to
//! TOML or RON, chosen by file extension.

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Load configuration from file, falling back to defaults if it is missing
    fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        match Self::load_from_file(path) {
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No configuration at {}, using defaults", path);
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Entity and component settings
    pub entity: EntityConfig,
}

impl Config for EngineConfig {}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter used when `RUST_LOG` is not set (e.g. "info", "component_engine=debug")
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Entity and component configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityConfig {
    /// Initial `Name` property of new meta data components
    pub default_name: String,
    /// Whether entity copies rebuild their observer graph
    pub rebuild_observers_on_copy: bool,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            default_name: "Entity".to_string(),
            rebuild_observers_on_copy: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> String {
        let dir = std::env::temp_dir();
        dir.join(format!("component_engine_{}_{}", std::process::id(), name))
            .to_string_lossy()
            .into_owned()
    }

    fn sample_config() -> EngineConfig {
        EngineConfig {
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
            entity: EntityConfig {
                default_name: "Prop".to_string(),
                rebuild_observers_on_copy: false,
            },
        }
    }

    #[test]
    fn test_toml_roundtrip() {
        let path = temp_path("config.toml");
        let config = sample_config();

        config.save_to_file(&path).unwrap();
        let loaded = EngineConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_roundtrip() {
        let path = temp_path("config.ron");
        let config = sample_config();

        config.save_to_file(&path).unwrap();
        let loaded = EngineConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: EngineConfig = toml::from_str("[entity]\ndefault_name = \"Crate\"\n").unwrap();

        assert_eq!(config.entity.default_name, "Crate");
        assert!(config.entity.rebuild_observers_on_copy);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_unsupported_format() {
        let result = EngineConfig::default().save_to_file("settings.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = temp_path("missing.toml");
        let config = EngineConfig::load_or_default(&path).unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
