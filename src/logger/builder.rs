//! Stepwise construction of a [`LevelLogger`] before it is shared.

use super::LevelLogger;
use crate::fmt::ColorMode;
use crate::level::Level;
use crate::output::{Output, StderrOutput};
use crate::thresholds::Thresholds;

pub struct LevelLoggerBuilder {
    level: Level,
    caller_levels: Vec<(Level, Vec<String>)>,
    color_mode: ColorMode,
    output: Option<Box<dyn Output>>,
}

impl Default for LevelLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelLoggerBuilder {
    /// Starts from the permissive defaults of [`LevelLogger::new`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            level: Level::Verbose,
            caller_levels: Vec::new(),
            color_mode: ColorMode::Always,
            output: None,
        }
    }

    /// Global threshold.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Per-module override, applied in call order so later entries win.
    #[must_use]
    pub fn caller_level<I, S>(mut self, level: Level, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.caller_levels
            .push((level, modules.into_iter().map(Into::into).collect()));
        self
    }

    #[must_use]
    pub const fn colors(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// Replaces the default stderr sink.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    #[must_use]
    pub fn build(self) -> LevelLogger {
        let thresholds = Thresholds::new(self.level);
        for (level, modules) in self.caller_levels {
            thresholds.set_modules(level, modules);
        }
        let output = self
            .output
            .unwrap_or_else(|| Box::new(StderrOutput::new()));
        LevelLogger::with_parts(thresholds, self.color_mode, output)
    }
}
