use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_autoplay_secs")]
    pub autoplay_secs: u64,
    #[serde(default = "default_autoplay_enabled")]
    pub autoplay_enabled: bool,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_theme() -> String {
    "midnight".to_string()
}
fn default_autoplay_secs() -> u64 {
    6
}
fn default_autoplay_enabled() -> bool {
    true
}
fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            autoplay_secs: default_autoplay_secs(),
            autoplay_enabled: default_autoplay_enabled(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lounge")
            .join("config.toml")
    }

    pub fn autoplay_interval(&self) -> Duration {
        // A zero interval would fire on every tick; floor at one second.
        Duration::from_secs(self.autoplay_secs.max(1))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.clamp(10, 1000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "midnight");
        assert_eq!(config.autoplay_secs, 6);
        assert!(config.autoplay_enabled);
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_config_serde_partial_file_keeps_defaults() {
        let toml_str = r#"
theme = "terminal-default"
autoplay_enabled = false
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "terminal-default");
        assert!(!config.autoplay_enabled);
        assert_eq!(config.autoplay_secs, 6);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.theme, deserialized.theme);
        assert_eq!(config.autoplay_secs, deserialized.autoplay_secs);
        assert_eq!(config.autoplay_enabled, deserialized.autoplay_enabled);
    }

    #[test]
    fn test_autoplay_interval_floors_at_one_second() {
        let mut config = Config::default();
        config.autoplay_secs = 0;
        assert_eq!(config.autoplay_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_tick_rate_is_clamped() {
        let mut config = Config::default();
        config.tick_rate_ms = 0;
        assert_eq!(config.tick_rate(), Duration::from_millis(10));
        config.tick_rate_ms = 10_000;
        assert_eq!(config.tick_rate(), Duration::from_millis(1000));
    }
}
