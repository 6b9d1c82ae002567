//! Command-line front end: lets shell scripts emit lines that go through the
//! same thresholds and per-module overrides as the applications they drive.

use crate::caller::Caller;
use crate::config::Config;
use crate::fmt::ColorMode;
use crate::level::Level;
use crate::logger::LevelLogger;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Caller path used when `--caller` is not given.
pub const DEFAULT_CALLER: &str = "zlog::cli::main";

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Verbose,
    Trace,
    Debug,
    Info,
    #[value(alias = "warn")]
    Warning,
    Error,
    Fatal,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Verbose => Self::Verbose,
            LogLevel::Trace => Self::Trace,
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warning => Self::Warning,
            LogLevel::Error => Self::Error,
            LogLevel::Fatal => Self::Fatal,
        }
    }
}

/// Color choice for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ColorArg {
    Always,
    Never,
    Auto,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
            ColorArg::Auto => Self::Auto,
        }
    }
}

/// zlog - emit a leveled log line from the command line.
#[derive(Debug, Parser)]
#[command(name = "zlog", version, about = "Emit a leveled log line")]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Symbol path reported as the caller, e.g. `deploy::db::migrate`
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CALLER)]
    pub caller: String,

    /// Override the configured color mode
    #[arg(long, value_enum)]
    pub color: Option<ColorArg>,

    /// Fail on invalid config values instead of falling back to defaults
    #[arg(long)]
    pub strict: bool,

    /// Log level
    #[arg(value_enum)]
    pub level: LogLevel,

    /// Message words, joined by single spaces
    pub message: Vec<String>,
}

impl Cli {
    /// Config from `--config`, or the default location.
    ///
    /// # Errors
    /// Propagates config loading errors, and with `--strict` the first
    /// invalid level or color value.
    pub fn load_config(&self) -> Result<Config, crate::Error> {
        let config = self
            .config
            .as_deref()
            .map_or_else(Config::load, Config::load_from)?;
        if self.strict {
            config.validate()?;
        }
        Ok(config)
    }

    /// Emits the message through `logger` and reports success; logging itself
    /// never fails, filtered messages included.
    #[must_use]
    pub fn run(&self, logger: &LevelLogger) -> ExitCode {
        if let Some(color) = self.color {
            logger.set_color_mode(color.into());
        }
        let caller = Caller::new(self.caller.clone());
        let words: Vec<&dyn std::fmt::Display> = self
            .message
            .iter()
            .map(|word| word as &dyn std::fmt::Display)
            .collect();
        logger.log_line(self.level.into(), &caller, &words);
        ExitCode::SUCCESS
    }
}
