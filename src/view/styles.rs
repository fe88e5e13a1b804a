//! Row styling for the list widget.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// `--no-color` wins, then any `NO_COLOR` value; colors are on otherwise.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Explicit setting, for tests and embedding.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ListStyles =====

/// Styles applied to the parts of a list row.
///
/// The cursor item is always shown in reverse video so it stays visible
/// with colors off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStyles {
    /// Number, glyph and marker columns.
    pub prefix: Style,
    /// Item text.
    pub text: Style,
    /// Patched over every row of the cursor item.
    pub cursor: Style,
}

impl ListStyles {
    /// Styles for the given color setting.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let prefix = if config.colors_enabled() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        Self {
            prefix,
            text: Style::default(),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

impl Default for ListStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}
