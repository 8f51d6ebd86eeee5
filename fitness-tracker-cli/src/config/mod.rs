use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Bearer tokens from the last user and trainer logins
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub token: String,

    #[serde(default)]
    pub trainer_token: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Config {
    /// Get config directory path (~/.fitness-tracker/)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".fitness-tracker"))
    }

    /// Get config file path (~/.fitness-tracker/config.toml)
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from a file, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to a file, creating its directory
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Check if a user is logged in
    pub fn is_authenticated(&self) -> bool {
        !self.auth.token.is_empty()
    }

    /// Check if a trainer is logged in
    pub fn is_trainer_authenticated(&self) -> bool {
        !self.auth.trainer_token.is_empty()
    }

    pub fn set_token(&mut self, token: String) {
        self.auth.token = token;
    }

    pub fn set_trainer_token(&mut self, token: String) {
        self.auth.trainer_token = token;
    }

    /// Clear both tokens
    pub fn clear_tokens(&mut self) {
        self.auth.token.clear();
        self.auth.trainer_token.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_seconds, 30);
        assert!(!config.is_authenticated());
        assert!(!config.is_trainer_authenticated());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[auth]\ntoken = \"abc\"\n").unwrap();

        assert!(config.is_authenticated());
        assert_eq!(config.api.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.api.base_url = "http://fitness.test".to_string();
        config.set_trainer_token("trainer-token".to_string());
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api.base_url, "http://fitness.test");
        assert!(loaded.is_trainer_authenticated());
        assert!(!loaded.is_authenticated());

        let mut loaded = loaded;
        loaded.clear_tokens();
        assert!(!loaded.is_trainer_authenticated());
    }
}
