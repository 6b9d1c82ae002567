//! The level-gated logger. Thresholds, color mode and the sink all use
//! interior mutability so one shared instance can be reconfigured in place
//! while other threads keep logging.

mod builder;
mod from_config;

pub use builder::LevelLoggerBuilder;

use crate::caller::Caller;
use crate::fmt::{self, ColorMode};
use crate::level::Level;
use crate::output::{Output, StderrOutput};
use crate::thresholds::Thresholds;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{PoisonError, RwLock};

pub struct LevelLogger {
    thresholds: Thresholds,
    color_mode: AtomicU8,
    output: RwLock<Box<dyn Output>>,
}

impl Default for LevelLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LevelLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevelLogger")
            .field("global_level", &self.global_level())
            .field("caller_levels", &self.thresholds.modules())
            .field("color_mode", &self.color_mode())
            .field(
                "output",
                &self.output.read().unwrap_or_else(PoisonError::into_inner),
            )
            .finish()
    }
}

impl LevelLogger {
    /// Most permissive setup: everything passes, colored, timestamped stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(
            Thresholds::default(),
            ColorMode::Always,
            Box::new(StderrOutput::new()),
        )
    }

    #[must_use]
    pub const fn builder() -> LevelLoggerBuilder {
        LevelLoggerBuilder::new()
    }

    pub(crate) const fn with_parts(
        thresholds: Thresholds,
        color_mode: ColorMode,
        output: Box<dyn Output>,
    ) -> Self {
        Self {
            thresholds,
            color_mode: AtomicU8::new(color_mode as u8),
            output: RwLock::new(output),
        }
    }

    /// Replaces the global threshold for subsequent calls.
    pub fn set_global_level(&self, level: Level) {
        self.thresholds.set_global(level);
    }

    /// Sets `level` as the threshold of every named module identifier.
    ///
    /// A module identifier is the caller path minus its function, e.g.
    /// `my_app::net` or `my_app::net::Client` for methods. Generic arguments
    /// are not part of it: methods of `Cache<K, V>` key as `my_app::Cache`.
    pub fn set_caller_level<I, S>(&self, level: Level, modules: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.thresholds.set_modules(level, modules);
    }

    /// Drops every per-module override.
    pub fn clear_caller_levels(&self) {
        self.thresholds.clear_modules();
    }

    #[must_use]
    pub fn global_level(&self) -> Level {
        self.thresholds.global()
    }

    #[must_use]
    pub fn caller_level(&self, module: &str) -> Option<Level> {
        self.thresholds.module(module)
    }

    /// Sorted snapshot of the per-module overrides.
    #[must_use]
    pub fn caller_levels(&self) -> Vec<(String, Level)> {
        self.thresholds.modules()
    }

    /// Threshold a call from `module` is compared against.
    #[must_use]
    pub fn effective_level(&self, module: &str) -> Level {
        self.thresholds.resolve(module)
    }

    /// Whether a call at `level` from `caller` would produce a line.
    #[must_use]
    pub fn enabled(&self, level: Level, caller: &Caller) -> bool {
        level >= self.thresholds.resolve(caller.module())
    }

    pub fn set_color_mode(&self, mode: ColorMode) {
        self.color_mode.store(mode as u8, Ordering::Relaxed);
    }

    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        ColorMode::from_u8(self.color_mode.load(Ordering::Relaxed))
    }

    /// Swaps the sink. Lines already handed to the old sink stay there.
    pub fn set_output(&self, output: impl Output + 'static) {
        *self.output.write().unwrap_or_else(PoisonError::into_inner) = Box::new(output);
    }

    /// Template-style entry point. Below the threshold `args` is never rendered.
    pub fn log_formatted(&self, level: Level, caller: &Caller, args: std::fmt::Arguments<'_>) {
        if !self.enabled(level, caller) {
            return;
        }
        self.emit(level, caller, &args.to_string());
    }

    /// Line-oriented entry point: args joined by spaces, newline-terminated.
    pub fn log_line(&self, level: Level, caller: &Caller, args: &[&dyn std::fmt::Display]) {
        if !self.enabled(level, caller) {
            return;
        }
        self.emit(level, caller, &fmt::join_line(args));
    }

    /// Buffered sinks may hold tail data until flushed.
    ///
    /// # Errors
    /// I/O errors from the sink.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.output
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }

    fn emit(&self, level: Level, caller: &Caller, body: &str) {
        let line = fmt::render_line(
            level,
            caller.context(),
            caller.function(),
            body,
            self.color_mode().enabled(),
        );
        let _ = self
            .output
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .write(&line);
    }
}
