//! Logger configuration from zlog config files.

use super::{LevelLogger, LevelLoggerBuilder};
use crate::config::Config;

impl LevelLogger {
    /// Builds a logger with the thresholds, color mode and stderr settings of `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut builder = LevelLoggerBuilder::new()
            .level(config.parse_level())
            .colors(config.parse_color_mode())
            .output(config.stderr_output());

        for (module, level) in config.module_levels().levels {
            builder = builder.caller_level(level, [module]);
        }

        builder.build()
    }

    /// Re-applies thresholds and color mode from `config` in place. Existing
    /// per-module overrides are replaced by the config's table; the sink is
    /// left alone so a custom `Output` survives a reload.
    pub fn apply_config(&self, config: &Config) {
        let modules = config.module_levels();

        self.set_global_level(config.parse_level());
        self.set_color_mode(config.parse_color_mode());
        self.clear_caller_levels();
        for (module, level) in modules.levels {
            self.set_caller_level(level, [module]);
        }
    }
}
