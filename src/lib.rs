//! `zlog` - leveled logging with per-module thresholds and call-site labels.
//!
//! Every line names the function that logged it:
//!
//! ```text
//! 2024/01/31 14:05:09 [WARNING][Client: connect] retrying in 5s
//! ```
//!
//! A call is emitted when its level is at or above the threshold of the
//! calling module, which is a per-module override if one is set and the
//! global threshold otherwise.
//!
//! # Example
//!
//! ```
//! use zlog::Level;
//!
//! zlog::set_global_level(Level::Info);
//! zlog::set_caller_level(Level::Error, ["my_app::noisy"]);
//!
//! zlog::infof!("listening on port {}", 8080);
//! zlog::debugln!("filtered out:", "below INFO");
//! zlog::fatalln!("labelled FATAL, the process keeps running");
//! ```
//!
//! # Features
//!
//! - `cli` (default): builds the `zlog` binary for shell scripts

pub mod caller;
pub mod config;
pub mod fmt;
pub mod level;
pub mod logger;
pub mod output;

mod error;
mod global;
mod macros;
mod thresholds;

#[cfg(feature = "cli")]
pub mod cli;

pub use caller::Caller;
pub use config::Config;
pub use error::Error;
pub use fmt::ColorMode;
pub use global::{
    configure, global, log_formatted, log_line, set_caller_level, set_color_mode,
    set_global_level, set_output,
};
pub use level::{LEVEL_NAMES, Level, ParseLevelError};
pub use logger::{LevelLogger, LevelLoggerBuilder};
pub use output::{CaptureOutput, Output, StderrOutput};
