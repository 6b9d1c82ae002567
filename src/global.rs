//! The process-wide logger behind the emission macros.
//!
//! Created on first use with the permissive defaults (`Verbose`, colors,
//! timestamped stderr) and never torn down. All configuration happens in place
//! through the functions below, so there is no install-before-first-log rule.

use crate::caller::Caller;
use crate::config::Config;
use crate::fmt::ColorMode;
use crate::level::Level;
use crate::logger::LevelLogger;
use crate::output::Output;
use std::sync::LazyLock;

static GLOBAL: LazyLock<LevelLogger> = LazyLock::new(LevelLogger::new);

#[must_use]
pub fn global() -> &'static LevelLogger {
    &GLOBAL
}

/// Replaces the process-wide global threshold.
pub fn set_global_level(level: Level) {
    GLOBAL.set_global_level(level);
}

/// Sets a process-wide override for each named module identifier.
pub fn set_caller_level<I, S>(level: Level, modules: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    GLOBAL.set_caller_level(level, modules);
}

pub fn set_color_mode(mode: ColorMode) {
    GLOBAL.set_color_mode(mode);
}

pub fn set_output(output: impl Output + 'static) {
    GLOBAL.set_output(output);
}

/// Applies `config` to the process-wide logger, including its stderr settings.
pub fn configure(config: &Config) {
    GLOBAL.set_output(config.stderr_output());
    GLOBAL.apply_config(config);
}

pub fn log_formatted(level: Level, caller: &Caller, args: std::fmt::Arguments<'_>) {
    GLOBAL.log_formatted(level, caller, args);
}

pub fn log_line(level: Level, caller: &Caller, args: &[&dyn std::fmt::Display]) {
    GLOBAL.log_line(level, caller, args);
}
