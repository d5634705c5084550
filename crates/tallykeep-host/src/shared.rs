//! Shared registry handle.
//!
//! All reads and writes to the label -> count mapping are a critical
//! section: every method here holds the single registry lock for the full
//! operation, so compound reads (`total_count`, the duplicate check in
//! `add_counter`) always see a consistent map.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tallykeep_core::error::Result;
use tallykeep_core::registry::CounterRegistry;
use tallykeep_core::snapshot::Snapshot;

use crate::config::{ConfigError, SeedConfig};

/// Cloneable handle to one registry behind a single `RwLock`.
#[derive(Clone, Default, Debug)]
pub struct SharedRegistry {
    inner: Arc<RwLock<CounterRegistry>>,
}

impl SharedRegistry {
    /// Empty registry behind a fresh lock.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(CounterRegistry::new())),
        }
    }

    /// Seed a registry from config. A repeated seed label surfaces as
    /// `ConfigError::Registry` carrying `DuplicateLabel`.
    pub fn from_config(cfg: &SeedConfig) -> std::result::Result<Self, ConfigError> {
        let reg = CounterRegistry::with_labels(cfg.labels())?;
        tracing::info!(counters = reg.len(), "registry seeded from config");
        Ok(Self {
            inner: Arc::new(RwLock::new(reg)),
        })
    }

    // Registry ops never leave partial state, so a poisoned lock still
    // guards a consistent map; take the inner guard and keep going.
    fn read(&self) -> RwLockReadGuard<'_, CounterRegistry> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, CounterRegistry> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn count(&self, label: &str) -> Result<i64> {
        self.read().count(label)
    }

    pub fn total_count(&self) -> i64 {
        self.read().total_count()
    }

    pub fn labels(&self) -> Vec<String> {
        self.read().labels().into_iter().map(String::from).collect()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.read().contains(label)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Label-sorted view captured under the read lock.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.read())
    }

    pub fn add_counter(&self, label: &str) -> Result<()> {
        self.write().add_counter(label)?;
        tracing::debug!(%label, "counter added");
        Ok(())
    }

    pub fn remove_counter(&self, label: &str) -> Result<()> {
        self.write().remove_counter(label)?;
        tracing::debug!(%label, "counter removed");
        Ok(())
    }

    pub fn reset_all(&self) {
        self.write().reset_all();
        tracing::debug!("all counters reset");
    }

    pub fn reset(&self, label: &str) -> Result<()> {
        self.write().reset(label)
    }

    pub fn clear(&self) {
        self.write().clear();
        tracing::debug!("registry cleared");
    }

    pub fn increment(&self, label: &str) -> Result<i64> {
        self.write().increment(label)
    }

    pub fn increment_by(&self, label: &str, step: i64) -> Result<i64> {
        self.write().increment_by(label, step)
    }

    pub fn decrement(&self, label: &str) -> Result<i64> {
        self.write().decrement(label)
    }

    pub fn decrement_by(&self, label: &str, step: i64) -> Result<i64> {
        self.write().decrement_by(label, step)
    }
}
