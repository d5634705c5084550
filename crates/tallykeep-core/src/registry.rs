//! Named-counter registry.
//!
//! Mutation rules:
//! - Every operation validates before it mutates; a returned error means the
//!   registry is exactly as it was.
//! - Label lookup always precedes step validation when both apply.
//! - Single-step increment/decrement are unconditional; counts may go
//!   negative. Only the step-parameterized variants check `step > 0`.

use std::collections::HashMap;

use crate::error::{Result, TallyError};

/// Registry of named counters: `label -> count`.
#[derive(Debug, Clone, Default)]
pub struct CounterRegistry {
    counters: HashMap<String, i64>,
}

impl CounterRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            counters: HashMap::new(),
        }
    }

    /// Registry pre-seeded with each given label at count 0.
    ///
    /// Labels are inserted in order; the first repeated label aborts
    /// construction with `DuplicateLabel` and no registry is returned.
    pub fn with_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut reg = Self::new();
        for label in labels {
            reg.add_counter(label)?;
        }
        Ok(reg)
    }

    fn slot(&mut self, label: &str) -> Result<&mut i64> {
        self.counters
            .get_mut(label)
            .ok_or_else(|| TallyError::NoLabel(label.to_string()))
    }

    /// Current count for `label`.
    pub fn count(&self, label: &str) -> Result<i64> {
        self.counters
            .get(label)
            .copied()
            .ok_or_else(|| TallyError::NoLabel(label.to_string()))
    }

    /// Sum of all counts (0 when empty).
    pub fn total_count(&self) -> i64 {
        self.counters.values().sum()
    }

    /// Current set of labels. Order is unspecified; use
    /// [`Snapshot::capture`](crate::snapshot::Snapshot::capture) for a
    /// deterministic view.
    pub fn labels(&self) -> Vec<&str> {
        self.counters.keys().map(String::as_str).collect()
    }

    /// Whether `label` is tracked.
    pub fn contains(&self, label: &str) -> bool {
        self.counters.contains_key(label)
    }

    /// Number of tracked counters.
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    /// Whether the registry tracks no counters.
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Insert `label` at count 0.
    pub fn add_counter(&mut self, label: impl Into<String>) -> Result<()> {
        let label = label.into();
        if self.counters.contains_key(&label) {
            return Err(TallyError::DuplicateLabel(label));
        }
        self.counters.insert(label, 0);
        Ok(())
    }

    /// Delete `label` and its count.
    pub fn remove_counter(&mut self, label: &str) -> Result<()> {
        self.counters
            .remove(label)
            .map(|_| ())
            .ok_or_else(|| TallyError::NoLabel(label.to_string()))
    }

    /// Set every existing counter back to 0.
    pub fn reset_all(&mut self) {
        for count in self.counters.values_mut() {
            *count = 0;
        }
    }

    /// Set `label`'s count back to 0.
    pub fn reset(&mut self, label: &str) -> Result<()> {
        *self.slot(label)? = 0;
        Ok(())
    }

    /// Remove all labels, returning to the empty state.
    pub fn clear(&mut self) {
        self.counters.clear();
    }

    /// Add 1 to `label`'s count and return the new value.
    pub fn increment(&mut self, label: &str) -> Result<i64> {
        let count = self.slot(label)?;
        *count += 1;
        Ok(*count)
    }

    /// Add `step` to `label`'s count and return the new value.
    /// `step` must be strictly positive.
    pub fn increment_by(&mut self, label: &str, step: i64) -> Result<i64> {
        let count = self.slot(label)?;
        if step <= 0 {
            return Err(TallyError::BadValue(step));
        }
        *count += step;
        Ok(*count)
    }

    /// Subtract 1 from `label`'s count and return the new value. There is no
    /// floor: the count may go negative.
    pub fn decrement(&mut self, label: &str) -> Result<i64> {
        let count = self.slot(label)?;
        *count -= 1;
        Ok(*count)
    }

    /// Subtract `step` from `label`'s count and return the new value.
    /// `step` must be strictly positive.
    pub fn decrement_by(&mut self, label: &str, step: i64) -> Result<i64> {
        let count = self.slot(label)?;
        if step <= 0 {
            return Err(TallyError::BadValue(step));
        }
        *count -= step;
        Ok(*count)
    }
}
