//! Terminal styling and color utilities.
//!
//! This module provides ANSI escape code definitions and capability detection
//! for terminal output formatting.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";

    // Tag colors (bold reverse video for high visibility badges)
    /// Bold reverse green for STRT tags.
    pub const TAG_START: &str = "\x1b[1;7;32m";
    /// Bold reverse cyan for STEP tags.
    pub const TAG_STEP: &str = "\x1b[1;7;36m";
    /// Bold reverse magenta for GOAL tags.
    pub const TAG_GOAL: &str = "\x1b[1;7;35m";

    /// Bright bold white for emphasis (entrance and area names).
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements.
    pub const GRAY: &str = "\x1b[90m";
    /// Yellow for warnings.
    pub const YELLOW: &str = "\x1b[33m";
    /// Red for failures.
    pub const RED: &str = "\x1b[31m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_start: &'static str,
    pub tag_step: &'static str,
    pub tag_goal: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub yellow: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_start: colors::TAG_START,
            tag_step: colors::TAG_STEP,
            tag_goal: colors::TAG_GOAL,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            yellow: colors::YELLOW,
            red: colors::RED,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_start: "",
            tag_step: "",
            tag_goal: "",
            white_bold: "",
            gray: "",
            yellow: "",
            red: "",
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
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
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

/// Check if the terminal advertises a UTF-8 locale via `LANG` or `LC_ALL`.
#[must_use]
pub fn supports_unicode() -> bool {
    ["LANG", "LC_ALL"].iter().any(|name| {
        std::env::var(name)
            .map(|value| value.to_uppercase().contains("UTF"))
            .unwrap_or(false)
    })
}

/// Arrow used between route endpoints.
#[must_use]
pub fn arrow() -> &'static str {
    if supports_unicode() {
        "→"
    } else {
        "->"
    }
}
