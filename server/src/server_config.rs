use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "tictactoe_server_config.yaml";
/// Absolute, so the UI is found whatever the working directory is.
pub const DEFAULT_STATIC_FILES_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");
const MAX_THINKING_DELAY_MS: u64 = 10_000;

pub fn get_config_manager(
    path: impl Into<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

/// Must be called before loading, since a missing file means defaults.
pub fn describe_config_source(path: &Path) -> String {
    if path.is_file() {
        format!("Loaded config from {}", path.display())
    } else {
        format!("No config at {}, using defaults", path.display())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub address: String,
    pub static_files_path: String,
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        self.address
            .parse::<SocketAddr>()
            .map_err(|e| format!("Invalid server address '{}': {}", self.address, e))?;
        if self.static_files_path.trim().is_empty() {
            return Err("static_files_path must not be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameplayConfig {
    /// Pause before the computer's move is applied.
    pub thinking_delay_ms: u64,
}

impl GameplayConfig {
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }
}

impl Validate for GameplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.thinking_delay_ms > MAX_THINKING_DELAY_MS {
            return Err(format!(
                "thinking_delay_ms must not exceed {} (got {})",
                MAX_THINKING_DELAY_MS, self.thinking_delay_ms
            ));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub gameplay: GameplayConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.gameplay.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                address: "0.0.0.0:5000".to_string(),
                static_files_path: DEFAULT_STATIC_FILES_PATH.to_string(),
            },
            gameplay: GameplayConfig {
                thinking_delay_ms: 1000,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_server_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
        assert_eq!(
            Config::default().gameplay.thinking_delay(),
            Duration::from_secs(1)
        );
    }

    #[test]
    fn test_default_static_files_path_does_not_depend_on_working_directory() {
        let path = PathBuf::from(Config::default().server.static_files_path);
        assert!(path.is_absolute());
        assert!(path.join("index.html").is_file());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = Config {
            gameplay: GameplayConfig {
                thinking_delay_ms: 250,
            },
            ..Config::default()
        };
        let path = get_temp_file_path();
        let manager = get_config_manager(path.clone());

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh_manager = get_config_manager(path.clone());
        assert_eq!(fresh_manager.get_config().unwrap(), config);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_config_source_reports_missing_file_and_defaults() {
        let path = get_temp_file_path();
        assert!(describe_config_source(&path).starts_with("No config at"));

        get_config_manager(path.clone()).set_config(&Config::default()).unwrap();
        assert!(describe_config_source(&path).starts_with("Loaded config from"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            server:
              # address is missing
              static_files_path: static
            gameplay:
              thinking_delay_ms: 1000
        "#;

        let path = get_temp_file_path();
        FileContentConfigProvider::new(path.clone())
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager = get_config_manager(path.clone());
        assert!(manager.get_config().is_err());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_out_of_range_values_fail_validation() {
        let mut config = Config::default();
        config.gameplay.thinking_delay_ms = 60_000;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.server.address = "not an address".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.server.static_files_path = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
