// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration: overflow limit, display
//! durations and dismiss mode, loaded from and saved to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use toast_stack::config::{self, Config, DurationSetting};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Show at most three toasts at once
//! config.limit = 3;
//! config.duration = DurationSetting::Uniform(5);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.limit, 3);
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::diagnostics::JournalCapacity;
use crate::domain::toast::{DismissMode, DisplayDuration, VisibleLimit};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ToastStack";
const CONFIG_DIR_ENV: &str = "TOAST_STACK_CONFIG_DIR";

/// Display time in seconds, either for every kind or per flash kind.
///
/// In TOML this is either `duration = 4` or a table such as
/// `duration = { notice = 4, alert = 0, default = 6 }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationSetting {
    Uniform(u64),
    PerKind(BTreeMap<String, u64>),
}

impl Default for DurationSetting {
    fn default() -> Self {
        DurationSetting::Uniform(DEFAULT_DURATION_SECS)
    }
}

impl DurationSetting {
    /// Seconds configured for `kind`, falling back to the `default` entry and
    /// then to [`DEFAULT_DURATION_SECS`].
    #[must_use]
    pub fn secs_for(&self, kind: &str) -> u64 {
        match self {
            DurationSetting::Uniform(secs) => *secs,
            DurationSetting::PerKind(table) => table
                .get(kind)
                .or_else(|| table.get(DEFAULT_DURATION_KEY))
                .copied()
                .unwrap_or(DEFAULT_DURATION_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of visible toasts, 0 for unlimited.
    pub limit: usize,
    #[serde(with = "dismiss_mode_serde")]
    pub dismiss: DismissMode,
    /// Number of lifecycle events kept for inspection.
    pub journal_capacity: usize,
    /// Kept last so a per-kind table serializes after the plain values.
    pub duration: DurationSetting,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            dismiss: DismissMode::default(),
            journal_capacity: DEFAULT_JOURNAL_CAPACITY,
            duration: DurationSetting::default(),
        }
    }
}

impl Config {
    /// Overflow limit as a validated domain value.
    #[must_use]
    pub fn visible_limit(&self) -> VisibleLimit {
        VisibleLimit::new(self.limit)
    }

    /// Total display time for a toast of the given flash kind.
    #[must_use]
    pub fn display_duration_for(&self, kind: &str) -> DisplayDuration {
        DisplayDuration::from_secs(self.duration.secs_for(kind))
    }

    /// Returns true if toasts of this kind carry an explicit close control.
    ///
    /// The control is always shown in button mode, and for toasts that never
    /// remove themselves.
    #[must_use]
    pub fn shows_close_control(&self, kind: &str) -> bool {
        self.dismiss == DismissMode::Button || self.display_duration_for(kind).is_infinite()
    }

    #[must_use]
    pub fn journal_capacity(&self) -> JournalCapacity {
        JournalCapacity::new(self.journal_capacity)
    }
}

/// Serializes [`DismissMode`] as its keyword and rejects unknown keywords
/// while the configuration is parsed.
mod dismiss_mode_serde {
    use crate::domain::toast::DismissMode;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(mode: &DismissMode, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(mode.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DismissMode, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads a configuration file.
///
/// Unlike missing keys, which fall back to defaults, an invalid dismiss mode
/// or malformed TOML is an error: it is rejected here rather than when a toast
/// is created.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    log::debug!("loaded toast config from {}", path.display());
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Parses a dismiss mode given on the command line.
pub fn parse_dismiss(raw: &str) -> Result<DismissMode> {
    raw.parse().map_err(|e| Error::Config(format!("{}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostics::journal_capacity_bounds;
    use crate::domain::toast::DisplayDuration;
    use tempfile::tempdir;

    #[test]
    fn domain_bounds_match_config() {
        use crate::domain::toast::{display_bounds as bounds, limit_bounds};
        assert_eq!(bounds::ENTRY_ANIMATION_MS, ENTRY_ANIMATION_MS);
        assert_eq!(bounds::MIN_REMAINING_MS, MIN_REMAINING_MS);
        assert_eq!(bounds::MIN_REMAINING_DIVISOR, MIN_REMAINING_DIVISOR);
        assert_eq!(bounds::MAX_SECS, MAX_DURATION_SECS);
        assert_eq!(limit_bounds::MAX, MAX_LIMIT);
        assert_eq!(journal_capacity_bounds::DEFAULT, DEFAULT_JOURNAL_CAPACITY);
        assert_eq!(journal_capacity_bounds::MIN, MIN_JOURNAL_CAPACITY);
        assert_eq!(journal_capacity_bounds::MAX, MAX_JOURNAL_CAPACITY);
    }

    #[test]
    fn default_config_matches_defaults() {
        let config = Config::default();
        assert_eq!(config.limit, 0);
        assert_eq!(config.dismiss, DismissMode::Button);
        assert_eq!(config.duration.secs_for("notice"), 4);
        assert!(config.visible_limit().is_unlimited());
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut table = BTreeMap::new();
        table.insert("notice".to_string(), 4);
        table.insert("alert".to_string(), 0);
        let config = Config {
            limit: 3,
            duration: DurationSetting::PerKind(table),
            dismiss: DismissMode::Click,
            journal_capacity: 64,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn scalar_duration_parses_as_uniform() {
        let config: Config = toml::from_str("duration = 7").expect("valid toml");
        assert_eq!(config.duration, DurationSetting::Uniform(7));
        assert_eq!(config.duration.secs_for("anything"), 7);
    }

    #[test]
    fn per_kind_duration_falls_back_to_default_entry() {
        let config: Config =
            toml::from_str("duration = { notice = 2, alert = 0, default = 9 }").expect("valid toml");
        assert_eq!(config.duration.secs_for("notice"), 2);
        assert_eq!(config.duration.secs_for("alert"), 0);
        assert_eq!(config.duration.secs_for("success"), 9);
    }

    #[test]
    fn per_kind_duration_without_default_entry_uses_crate_default() {
        let config: Config = toml::from_str("duration = { alert = 0 }").expect("valid toml");
        assert_eq!(config.duration.secs_for("notice"), DEFAULT_DURATION_SECS);
    }

    #[test]
    fn display_duration_includes_entry_animation() {
        let config = Config::default();
        assert_eq!(
            config.display_duration_for("notice"),
            DisplayDuration::from_millis(4400)
        );
    }

    #[test]
    fn unknown_dismiss_mode_is_rejected_at_load() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "dismiss = \"swipe\"").expect("failed to write config");

        let err = load_from_path(&config_path).expect_err("swipe is not a dismiss mode");
        assert!(matches!(err, Error::Config(msg) if msg.contains("swipe")));
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: Config = toml::from_str("limit = 5").expect("valid toml");
        assert_eq!(config.limit, 5);
        assert_eq!(config.dismiss, DismissMode::Button);
        assert_eq!(config.journal_capacity, DEFAULT_JOURNAL_CAPACITY);
    }

    #[test]
    fn close_control_shown_for_button_mode_or_sticky_toasts() {
        let mut table = BTreeMap::new();
        table.insert("alert".to_string(), 0);
        let mut config = Config {
            duration: DurationSetting::PerKind(table),
            ..Config::default()
        };
        assert!(config.shows_close_control("notice"));

        config.dismiss = DismissMode::Click;
        assert!(!config.shows_close_control("notice"));
        assert!(config.shows_close_control("alert"));
    }

    #[test]
    fn parse_dismiss_maps_to_config_error() {
        assert_eq!(parse_dismiss("click"), Ok(DismissMode::Click));
        assert!(matches!(parse_dismiss("hover"), Err(Error::Config(_))));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
