//! ANSI escape palette
//!
//! Styles are resolved once per report. With color disabled every style is
//! the empty string, so callers format unconditionally.

const DIM: &str = "\x1b[90m";
const ITALIC: &str = "\x1b[3m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";
const UNDERLINE: &str = "\x1b[4m";

/// Caller-side color preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Decide from the sink and the environment
    #[default]
    Auto,
    Always,
    Never,
}

/// Decide whether a report is colorized
///
/// Evaluated in order, first match wins: the caller's explicit mode, then
/// the sink (not a terminal disables color), then the environment
/// (`NO_COLOR` set disables color).
pub fn resolve_color(mode: ColorMode, sink_is_terminal: bool, no_color_env: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => sink_is_terminal && !no_color_env,
    }
}

/// Whether the `NO_COLOR` convention asks for plain output
pub fn no_color_requested() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Styles used by the report composer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapePalette {
    pub dim: &'static str,
    pub italic: &'static str,
    pub caret: &'static str,
    pub reset: &'static str,
    pub emphasis: &'static str,
}

impl EscapePalette {
    pub fn new(color: bool) -> Self {
        if color {
            Self {
                dim: DIM,
                italic: ITALIC,
                caret: RED,
                reset: RESET,
                emphasis: UNDERLINE,
            }
        } else {
            Self::plain()
        }
    }

    pub fn plain() -> Self {
        Self {
            dim: "",
            italic: "",
            caret: "",
            reset: "",
            emphasis: "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_mode_wins() {
        assert!(resolve_color(ColorMode::Always, false, true));
        assert!(!resolve_color(ColorMode::Never, true, false));
    }

    #[test]
    fn test_auto_requires_terminal_and_no_env_signal() {
        assert!(resolve_color(ColorMode::Auto, true, false));
        assert!(!resolve_color(ColorMode::Auto, false, false));
        assert!(!resolve_color(ColorMode::Auto, true, true));
    }

    #[test]
    fn test_plain_palette_is_empty() {
        let palette = EscapePalette::new(false);
        assert_eq!(palette, EscapePalette::plain());
        assert!(palette.dim.is_empty() && palette.reset.is_empty());
    }

    #[test]
    fn test_color_palette_uses_sgr() {
        let palette = EscapePalette::new(true);
        assert_eq!(palette.caret, "\x1b[31m");
        assert_eq!(palette.reset, "\x1b[0m");
    }
}
