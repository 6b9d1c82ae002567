//! Renders one log line: `[LEVEL][context: function] message`.

use super::color::{Color, colorize};
use crate::level::Level;
use std::fmt::{self, Write};

/// Builds the full line for `body`. Only the level label is colored.
#[must_use]
pub fn render_line(
    level: Level,
    context: &str,
    function: &str,
    body: &str,
    colors: bool,
) -> String {
    let label = level.as_str();
    let tag = match Color::for_level(level) {
        Some(color) if colors => colorize(label, color),
        _ => label.to_string(),
    };
    format!("[{tag}][{context}: {function}] {body}")
}

/// Line-oriented body: arguments separated by one space, one trailing newline.
/// Zero arguments give a bare `"\n"`.
#[must_use]
pub fn join_line(args: &[&dyn fmt::Display]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{arg}");
    }
    out.push('\n');
    out
}
