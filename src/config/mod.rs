// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[toasts]` - Motion preference, transition timing, failure policy
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_TOASTS_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//! use iced_toasts::ui::toasts::MotionMode;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toasts.motion = Some(MotionMode::Reduced);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use crate::ui::toasts::{FailurePolicy, MotionMode, Transition};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Whether toasts animate (system, reduced, or full).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motion: Option<MotionMode>,

    /// What happens to a toast whose presentation fails (remove or retain).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_failure: Option<FailurePolicy>,

    /// Entrance duration in milliseconds.
    #[serde(default = "default_enter_ms", skip_serializing_if = "Option::is_none")]
    pub enter_ms: Option<u64>,

    /// Time fully visible in milliseconds.
    #[serde(default = "default_hold_ms", skip_serializing_if = "Option::is_none")]
    pub hold_ms: Option<u64>,

    /// Exit duration in milliseconds.
    #[serde(default = "default_exit_ms", skip_serializing_if = "Option::is_none")]
    pub exit_ms: Option<u64>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            motion: Some(MotionMode::default()),
            on_failure: Some(FailurePolicy::default()),
            enter_ms: default_enter_ms(),
            hold_ms: default_hold_ms(),
            exit_ms: default_exit_ms(),
        }
    }
}

impl ToastConfig {
    /// Builds the transition timeline, clamping out-of-range durations.
    #[must_use]
    pub fn transition(&self) -> Transition {
        let edge = |value: Option<u64>, default: u64| {
            Duration::from_millis(
                value
                    .unwrap_or(default)
                    .clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS),
            )
        };

        Transition::new(
            edge(self.enter_ms, DEFAULT_ENTER_MS),
            Duration::from_millis(
                self.hold_ms
                    .unwrap_or(DEFAULT_HOLD_MS)
                    .clamp(MIN_HOLD_MS, MAX_HOLD_MS),
            ),
            edge(self.exit_ms, DEFAULT_EXIT_MS),
        )
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub toasts: ToastConfig,
}

#[allow(clippy::unnecessary_wraps)]
fn default_enter_ms() -> Option<u64> {
    Some(DEFAULT_ENTER_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_hold_ms() -> Option<u64> {
    Some(DEFAULT_HOLD_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_exit_ms() -> Option<u64> {
    Some(DEFAULT_EXIT_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default location.
///
/// Returns the default configuration plus a warning if the file exists but
/// cannot be parsed.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some(format!("Settings could not be read: {err}")),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
