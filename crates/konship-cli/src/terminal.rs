//! Terminal styling and color utilities.
//!
//! This module provides ANSI escape code definitions and color detection
//! for console output. Hazard notices and errors are highlighted when the
//! terminal supports it.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bold reverse red for hazard notices.
    pub const HAZARD: &str = "\x1b[1;7;31m";
    /// Bold red for error lines.
    pub const ERROR: &str = "\x1b[1;31m";
    /// Green for confirmations.
    pub const SUCCESS: &str = "\x1b[32m";
    /// Bright bold white for serial numbers and headings.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary text such as the prompt.
    pub const GRAY: &str = "\x1b[90m";
    /// Orange (256-color) for the banner.
    pub const ORANGE: &str = "\x1b[38;5;208m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub hazard: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub emphasis: &'static str,
    pub muted: &'static str,
    pub banner: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            hazard: colors::HAZARD,
            error: colors::ERROR,
            success: colors::SUCCESS,
            emphasis: colors::WHITE_BOLD,
            muted: colors::GRAY,
            banner: colors::ORANGE,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            hazard: "",
            error: "",
            success: "",
            emphasis: "",
            muted: "",
            banner: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects the `NO_COLOR` environment variable (https://no-color.org/) and
/// the `TERM=dumb` convention.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}
