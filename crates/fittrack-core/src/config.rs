//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Timer cadence and the countdown warning threshold
//! - Completion alert (vibration pattern)
//! - Progress window sizes
//!
//! Configuration is stored at `~/.config/fittrack/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Timer-specific configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_countdown_secs")]
    pub default_countdown_secs: u64,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_warning_threshold_secs")]
    pub warning_threshold_secs: u64,
}

/// Completion alert configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertConfig {
    #[serde(default = "default_true")]
    pub vibration: bool,
    /// Wait/vibrate durations in milliseconds, starting with a wait.
    #[serde(default = "default_pattern_ms")]
    pub pattern_ms: Vec<u64>,
}

/// Progress screen configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsConfig {
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/fittrack/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub alerts: AlertConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

// Default functions
fn default_countdown_secs() -> u64 {
    60
}
fn default_tick_interval_ms() -> u64 {
    1000
}
fn default_warning_threshold_secs() -> u64 {
    10
}
fn default_true() -> bool {
    true
}
fn default_pattern_ms() -> Vec<u64> {
    vec![0, 500, 200, 500]
}
fn default_window_days() -> u32 {
    7
}
fn default_recent_limit() -> usize {
    10
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_countdown_secs: default_countdown_secs(),
            tick_interval_ms: default_tick_interval_ms(),
            warning_threshold_secs: default_warning_threshold_secs(),
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            vibration: true,
            pattern_ms: default_pattern_ms(),
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            recent_limit: default_recent_limit(),
        }
    }
}

/// Returns `~/.config/fittrack[-dev]/` based on FITTRACK_ENV.
///
/// Set FITTRACK_ENV=dev to use the development directory.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FITTRACK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("fittrack-dev")
    } else {
        base_dir.join("fittrack")
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DirUnavailable {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let (parents, leaf) = match key.rsplit_once('.') {
            Some((parents, leaf)) => (Some(parents), leaf),
            None => (None, key),
        };
        if leaf.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        if let Some(parents) = parents {
            for part in parents.split('.') {
                current = current.get_mut(part).ok_or_else(unknown)?;
            }
        }

        let obj = current.as_object_mut().ok_or_else(unknown)?;
        let existing = obj.get(leaf).ok_or_else(unknown)?;

        let new_value = match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(
                value
                    .parse::<bool>()
                    .map_err(|e| invalid(e.to_string()))?,
            ),
            serde_json::Value::Number(_) => {
                let n = value
                    .parse::<u64>()
                    .map_err(|_| invalid(format!("cannot parse '{value}' as a whole number")))?;
                serde_json::Value::Number(n.into())
            }
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
            }
            _ => serde_json::Value::String(value.into()),
        };

        obj.insert(leaf.to_string(), new_value);
        Ok(())
    }

    /// Default location of the config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults there if absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key, in memory only.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        let mut json = serde_json::to_value(&*self).map_err(|e| invalid(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| invalid(e.to_string()))?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.alerts.pattern_ms, vec![0, 500, 200, 500]);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[timer]\ndefault_countdown_secs = 90\n").unwrap();
        assert_eq!(parsed.timer.default_countdown_secs, 90);
        assert_eq!(parsed.timer.tick_interval_ms, 1000);
        assert_eq!(parsed.stats.recent_limit, 10);
    }

    #[test]
    fn get_reads_nested_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("timer.warning_threshold_secs").as_deref(), Some("10"));
        assert_eq!(cfg.get("alerts.vibration").as_deref(), Some("true"));
        assert_eq!(cfg.get("timer.nope"), None);
        assert_eq!(cfg.get(""), None);
    }

    #[test]
    fn set_parses_by_existing_type() {
        let mut cfg = Config::default();
        cfg.set("timer.default_countdown_secs", "45").unwrap();
        cfg.set("alerts.vibration", "false").unwrap();
        cfg.set("alerts.pattern_ms", "[0, 250]").unwrap();
        assert_eq!(cfg.timer.default_countdown_secs, 45);
        assert!(!cfg.alerts.vibration);
        assert_eq!(cfg.alerts.pattern_ms, vec![0, 250]);
    }

    #[test]
    fn set_rejects_unknown_and_malformed() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("timer.missing", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            cfg.set("timer.tick_interval_ms", "soon"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_from_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());

        let mut changed = cfg.clone();
        changed.set("stats.window_days", "14").unwrap();
        changed.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().stats.window_days, 14);
    }

    #[test]
    fn load_from_corrupt_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timer = 3").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));
    }
}
