//! Deterministic export view of a registry.
//!
//! Registry iteration order is unspecified, so the snapshot sorts counters by
//! label before handing them to the host. Export only: there is no path from
//! a snapshot back into a registry.

use serde::Serialize;

use crate::registry::CounterRegistry;

/// One counter at capture time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterState {
    pub label: String,
    pub count: i64,
}

/// Label-sorted view of a registry plus its grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub counters: Vec<CounterState>,
    pub total: i64,
}

impl Snapshot {
    /// Capture the registry's current state, sorted by label.
    pub fn capture(reg: &CounterRegistry) -> Self {
        let mut counters: Vec<CounterState> = reg
            .labels()
            .into_iter()
            .filter_map(|label| {
                reg.count(label).ok().map(|count| CounterState {
                    label: label.to_string(),
                    count,
                })
            })
            .collect();
        counters.sort_by(|a, b| a.label.cmp(&b.label));

        Snapshot {
            counters,
            total: reg.total_count(),
        }
    }
}
