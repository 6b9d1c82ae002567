//! Threshold state shared by every log call of a logger.
//!
//! The global threshold is a relaxed `AtomicU8`: readers always see a whole
//! value but may lag a concurrent writer. Per-module overrides sit behind an
//! `RwLock` so log calls only ever share the lock with each other; writers
//! take it exclusively for a whole batch.

use crate::level::Level;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{PoisonError, RwLock};

#[derive(Debug)]
pub struct Thresholds {
    global: AtomicU8,
    /// Skips the read lock while no override was ever set.
    has_overrides: AtomicBool,
    modules: RwLock<HashMap<String, Level>>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(Level::Verbose)
    }
}

impl Thresholds {
    #[must_use]
    pub fn new(global: Level) -> Self {
        Self {
            global: AtomicU8::new(global as u8),
            has_overrides: AtomicBool::new(false),
            modules: RwLock::new(HashMap::new()),
        }
    }

    pub fn set_global(&self, level: Level) {
        self.global.store(level as u8, Ordering::Relaxed);
    }

    #[must_use]
    pub fn global(&self) -> Level {
        Level::from_u8(self.global.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Overwrites the override of every named module under one write lock.
    pub fn set_modules<I, S>(&self, level: Level, modules: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let populated = {
            let mut table = self.modules.write().unwrap_or_else(PoisonError::into_inner);
            table.extend(modules.into_iter().map(|module| (module.into(), level)));
            !table.is_empty()
        };
        if populated {
            self.has_overrides.store(true, Ordering::Release);
        }
    }

    pub fn clear_modules(&self) {
        self.modules
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.has_overrides.store(false, Ordering::Release);
    }

    #[must_use]
    pub fn module(&self, module: &str) -> Option<Level> {
        if !self.has_overrides.load(Ordering::Acquire) {
            return None;
        }
        self.modules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(module)
            .copied()
    }

    /// Override for `module` if one exists, else the global threshold.
    #[must_use]
    pub fn resolve(&self, module: &str) -> Level {
        self.module(module).unwrap_or_else(|| self.global())
    }

    /// Snapshot of the override table, sorted by module for stable output.
    #[must_use]
    pub fn modules(&self) -> Vec<(String, Level)> {
        let mut entries: Vec<_> = self
            .modules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        entries.sort();
        entries
    }
}
