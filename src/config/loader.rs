//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::view_state::renderer::Glyphs;
use crate::view_state::scroll::DEFAULT_SCROLL_MARGIN;
use crate::view_state::types::NumberingMode;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "WRAPLIST_CONFIG";
/// Environment variable switching relative numbering on (`1`/`true`) or off (`0`/`false`).
pub const RELATIVE_ENV_VAR: &str = "WRAPLIST_RELATIVE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/wraplist/config.toml`.
///
/// ```toml
/// relative_numbers = true
/// scroll_margin = 2
/// selected_marker = "[x]"
/// unselected_marker = "[ ]"
/// show_item_glyphs = false
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Start with relative line numbers.
    #[serde(default)]
    pub relative_numbers: Option<bool>,

    /// Rows kept between the cursor and the window edges.
    #[serde(default)]
    pub scroll_margin: Option<usize>,

    /// Marker on the cursor row.
    #[serde(default)]
    pub cursor_marker: Option<String>,

    /// Marker on selected items.
    #[serde(default)]
    pub selected_marker: Option<String>,

    /// Marker on unselected items.
    #[serde(default)]
    pub unselected_marker: Option<String>,

    /// Glyph on the first row of an item.
    #[serde(default)]
    pub head_glyph: Option<String>,

    /// Glyph on wrapped rows.
    #[serde(default)]
    pub continuation_glyph: Option<String>,

    /// Draw the head/continuation glyph column.
    #[serde(default)]
    pub show_item_glyphs: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Start with relative line numbers.
    pub relative_numbers: bool,
    /// Scroll margin in rows.
    pub scroll_margin: usize,
    /// Prefix markers.
    pub glyphs: Glyphs,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            relative_numbers: false,
            scroll_margin: DEFAULT_SCROLL_MARGIN,
            glyphs: Glyphs::default(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Initial numbering mode.
    pub fn numbering(&self) -> NumberingMode {
        if self.relative_numbers {
            NumberingMode::Relative
        } else {
            NumberingMode::Absolute
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/wraplist/wraplist.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("wraplist").join("wraplist.log")
    } else {
        PathBuf::from("wraplist.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/wraplist/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wraplist").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `WRAPLIST_CONFIG` environment variable
/// 3. Default path `~/.config/wraplist/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{CONFIG_ENV_VAR} is empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Parse a boolean switch as written in environment variables.
fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `WRAPLIST_RELATIVE`: relative numbering on or off. Unrecognized values are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(relative) = std::env::var(RELATIVE_ENV_VAR)
        .ok()
        .as_deref()
        .and_then(parse_switch)
    {
        config.relative_numbers = relative;
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let glyphs = defaults.glyphs;
    ResolvedConfig {
        relative_numbers: config.relative_numbers.unwrap_or(defaults.relative_numbers),
        scroll_margin: config.scroll_margin.unwrap_or(defaults.scroll_margin),
        glyphs: Glyphs {
            cursor_marker: config.cursor_marker.unwrap_or(glyphs.cursor_marker),
            selected_marker: config.selected_marker.unwrap_or(glyphs.selected_marker),
            unselected_marker: config.unselected_marker.unwrap_or(glyphs.unselected_marker),
            head_glyph: config.head_glyph.unwrap_or(glyphs.head_glyph),
            continuation_glyph: config
                .continuation_glyph
                .unwrap_or(glyphs.continuation_glyph),
            show_item_glyphs: config.show_item_glyphs.unwrap_or(glyphs.show_item_glyphs),
        },
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    relative_override: Option<bool>,
    margin_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(relative) = relative_override {
        config.relative_numbers = relative;
    }

    if let Some(margin) = margin_override {
        config.scroll_margin = margin;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
