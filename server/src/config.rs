use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub static_dir: PathBuf,
    pub cleanup_check_interval_secs: u64,
    pub game_inactivity_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            static_dir: PathBuf::from("server/static"),
            cleanup_check_interval_secs: 300,
            game_inactivity_timeout_secs: 3600,
        }
    }
}

impl ServerConfig {
    /// Reads the YAML config file; a missing file means defaults.
    pub fn load(path: &str) -> Result<Self, String> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(format!("Failed to read config file {}: {}", path, err)),
        };

        let config: Self = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to parse config file {}: {}", path, e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.cleanup_check_interval_secs == 0 {
            return Err("cleanup_check_interval_secs must be positive".to_string());
        }
        if self.game_inactivity_timeout_secs == 0 {
            return Err("game_inactivity_timeout_secs must be positive".to_string());
        }
        Ok(())
    }

    pub fn cleanup_check_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_check_interval_secs)
    }

    pub fn game_inactivity_timeout(&self) -> Duration {
        Duration::from_secs(self.game_inactivity_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = ServerConfig::load("does_not_exist.yaml").unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_parse_partial_yaml_keeps_defaults_for_rest() {
        let content = "bind_addr: \"127.0.0.1:8080\"\n";
        let config: ServerConfig = serde_yaml_ng::from_str(content).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.static_dir, ServerConfig::default().static_dir);
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let config = ServerConfig {
            cleanup_check_interval_secs: 0,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
