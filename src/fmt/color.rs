//! Fixed severity-to-color table. Three classes, bold 8-color SGR codes, so
//! the escapes render on any ANSI terminal.

use crate::level::Level;
use std::io::IsTerminal;
use std::str::FromStr;

/// The three colors a level tag can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Green,
    White,
    Red,
}

impl Color {
    /// Terminates the SGR styling opened by [`Color::code`].
    pub const RESET: &'static str = "\x1b[0m";

    /// Bold foreground escape for this color.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Green => "\x1b[1;32m",
            Self::White => "\x1b[1;37m",
            Self::Red => "\x1b[1;31m",
        }
    }

    /// Low levels are green, Info/Warning white, Error/Fatal red.
    /// `Silence` never labels a real message and gets no color.
    #[must_use]
    pub const fn for_level(level: Level) -> Option<Self> {
        match level {
            Level::Verbose | Level::Trace | Level::Debug => Some(Self::Green),
            Level::Info | Level::Warning => Some(Self::White),
            Level::Error | Level::Fatal => Some(Self::Red),
            Level::Silence => None,
        }
    }
}

/// Wraps `text` in the color's escape and a reset.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    let code = color.code();
    let reset = Color::RESET;
    format!("{code}{text}{reset}")
}

/// Whether level tags get escape codes. `Always` matches the classic output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ColorMode {
    #[default]
    Always = 0,
    Never = 1,
    /// Colors only while stderr is a terminal.
    Auto = 2,
}

impl ColorMode {
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Never,
            2 => Self::Auto,
            _ => Self::Always,
        }
    }

    /// Resolves `Auto` against the real stderr at call time.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stderr().is_terminal(),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Never => "never",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for ColorMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "always" | "true" | "on" => Ok(Self::Always),
            "never" | "false" | "off" => Ok(Self::Never),
            "auto" => Ok(Self::Auto),
            _ => Err(crate::Error::InvalidColorMode(s.to_string())),
        }
    }
}
