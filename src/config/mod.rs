//! TOML configuration loading, `source = "..."` include resolution and
//! per-module threshold parsing.
//!
//! ```toml
//! source = "~/.config/zlog/modules.toml"
//!
//! [general]
//! level = "info"
//! colors = "auto"
//!
//! [output]
//! timestamp = true
//! timestamp_format = "%Y/%m/%d %H:%M:%S"
//!
//! [modules]
//! "my_app::net" = "error"
//! ```

mod structs;

pub use structs::{GeneralConfig, OutputConfig};

use crate::fmt::ColorMode;
use crate::level::Level;
use crate::output::StderrOutput;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file is a valid config: `#[serde(default)]` on every section.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub output: OutputConfig,
    /// Module identifier to level name.
    pub modules: HashMap<String, String>,
}

/// Per-module overrides split into accepted and rejected entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleLevels {
    /// Sorted by module identifier.
    pub levels: Vec<(String, Level)>,
    /// Module identifiers whose level string did not parse.
    pub rejected: Vec<String>,
}

/// Pulls `source = "..."` lines out of raw TOML before deserialization.
/// Returns the include paths and the remaining content.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        let source = trimmed
            .strip_prefix("source")
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('='));
        if let Some(value) = source {
            let path = value.trim().trim_matches('"').trim_matches('\'');
            if !path.is_empty() {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl Config {
    /// Loads the config at [`Config::get_config_path`], resolving includes.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, a file can't be
    /// read, TOML parsing fails, or includes form a cycle.
    pub fn load() -> Result<Self, crate::Error> {
        let config_path = Self::get_config_path()?;
        Self::load_with_sources(&config_path, &mut HashSet::new())
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        Self::load_with_sources(path, &mut HashSet::new())
    }

    /// Parses TOML text. `source` lines are ignored here since there is no
    /// base file to resolve them against.
    ///
    /// # Errors
    /// Returns error on TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        let (_, toml_content) = extract_sources(content);
        Ok(toml::from_str(&toml_content)?)
    }

    /// `chain` holds the files currently being included, so a file reached
    /// twice through separate branches is fine and only a loop back errors.
    fn load_with_sources(path: &Path, chain: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if !chain.insert(canonical.clone()) {
            crate::warningf!("Cyclic include detected: {}", canonical.display());
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut config: Self = toml::from_str(&toml_content)?;

        for source_path in sources {
            let expanded = shellexpand::tilde(&source_path);
            let source_file = Path::new(expanded.as_ref());
            let source_file = if source_file.is_relative() {
                path.parent()
                    .map_or_else(|| source_file.to_path_buf(), |dir| dir.join(source_file))
            } else {
                source_file.to_path_buf()
            };
            if source_file.exists() {
                let source_config = Self::load_with_sources(&source_file, chain)?;
                config.merge(source_config);
            } else {
                crate::warningln!("Source file not found:", source_path);
            }
        }

        chain.remove(&canonical);
        Ok(config)
    }

    /// Folds an included config's `[modules]` table into `self` without
    /// overwriting existing keys, so the including file wins. `[general]` and
    /// `[output]` always come from the including file alone.
    pub fn merge(&mut self, other: Self) {
        for (module, level) in other.modules {
            self.modules.entry(module).or_insert(level);
        }
    }

    /// `<config_dir>/zlog/zlog.toml`, e.g. `~/.config/zlog/zlog.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("zlog").join("zlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Strict check of every level and color string, for callers that want
    /// a hard error instead of the fallbacks below.
    ///
    /// # Errors
    /// `InvalidLevel` or `InvalidColorMode` for the first bad value.
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.general.level.parse::<Level>()?;
        self.general.colors.parse::<ColorMode>()?;
        let mut modules: Vec<_> = self.modules.iter().collect();
        modules.sort();
        for (module, level) in modules {
            level
                .parse::<Level>()
                .map_err(|e| crate::Error::InvalidLevel(format!("{module}: {e}")))?;
        }
        Ok(())
    }

    /// Global threshold; unparsable values fall back to `Verbose`.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or_else(|_| {
            crate::warningf!("Invalid global level '{}', using VERBOSE", self.general.level);
            Level::Verbose
        })
    }

    /// Color mode; unparsable values fall back to `Always`.
    #[must_use]
    pub fn parse_color_mode(&self) -> ColorMode {
        self.general.colors.parse().unwrap_or_else(|_| {
            crate::warningf!("Invalid color mode '{}', using always", self.general.colors);
            ColorMode::Always
        })
    }

    #[must_use]
    pub fn module_levels(&self) -> ModuleLevels {
        let mut out = ModuleLevels::default();
        for (module, level) in &self.modules {
            match level.parse::<Level>() {
                Ok(level) => out.levels.push((module.clone(), level)),
                Err(e) => {
                    crate::warningf!("Skipping override for {module}: {e}");
                    out.rejected.push(module.clone());
                }
            }
        }
        out.levels.sort();
        out.rejected.sort();
        out
    }

    /// Stderr sink with the `[output]` settings applied.
    #[must_use]
    pub fn stderr_output(&self) -> StderrOutput {
        if self.output.timestamp {
            StderrOutput::new().timestamp_format(self.output.timestamp_format.clone())
        } else {
            StderrOutput::new().timestamps(false)
        }
    }
}
