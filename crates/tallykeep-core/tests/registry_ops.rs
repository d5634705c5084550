//! Registry operation tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tallykeep_core::registry::CounterRegistry;

#[test]
fn new_registry_is_empty() {
    let reg = CounterRegistry::new();
    assert!(reg.is_empty());
    assert_eq!(reg.len(), 0);
    assert!(reg.labels().is_empty());
    assert_eq!(reg.total_count(), 0);
}

#[test]
fn with_labels_seeds_counters_at_zero() {
    let reg = CounterRegistry::with_labels(["a", "b"]).unwrap();
    assert_eq!(reg.count("a").unwrap(), 0);
    assert_eq!(reg.count("b").unwrap(), 0);
    assert_eq!(reg.total_count(), 0);

    let mut labels = reg.labels();
    labels.sort_unstable();
    assert_eq!(labels, vec!["a", "b"]);
}

#[test]
fn increment_adds_to_the_right_counter() {
    let mut reg = CounterRegistry::with_labels(["a", "b"]).unwrap();
    reg.increment("a").unwrap();
    reg.increment_by("b", 10).unwrap();

    assert_eq!(reg.count("a").unwrap(), 1);
    assert_eq!(reg.count("b").unwrap(), 10);
    assert_eq!(reg.total_count(), 11);
}

#[test]
fn increment_returns_the_new_count() {
    let mut reg = CounterRegistry::with_labels(["a"]).unwrap();
    assert_eq!(reg.increment("a").unwrap(), 1);
    assert_eq!(reg.increment_by("a", 4).unwrap(), 5);
    assert_eq!(reg.decrement("a").unwrap(), 4);
    assert_eq!(reg.decrement_by("a", 10).unwrap(), -6);
}

#[test]
fn decrement_has_no_floor() {
    let mut reg = CounterRegistry::with_labels(["a"]).unwrap();
    reg.decrement_by("a", 5).unwrap();
    assert_eq!(reg.count("a").unwrap(), -5);

    reg.decrement("a").unwrap();
    assert_eq!(reg.count("a").unwrap(), -6);
    assert_eq!(reg.total_count(), -6);
}

#[test]
fn reset_zeroes_one_counter() {
    let mut reg = CounterRegistry::with_labels(["a", "b"]).unwrap();
    reg.increment_by("a", 7).unwrap();
    reg.increment_by("b", 3).unwrap();

    reg.reset("a").unwrap();
    assert_eq!(reg.count("a").unwrap(), 0);
    assert_eq!(reg.count("b").unwrap(), 3);
}

#[test]
fn reset_all_is_idempotent() {
    let mut reg = CounterRegistry::with_labels(["a", "b"]).unwrap();
    reg.increment("a").unwrap();
    reg.increment_by("b", 10).unwrap();

    reg.reset_all();
    assert_eq!(reg.count("a").unwrap(), 0);
    assert_eq!(reg.count("b").unwrap(), 0);
    assert_eq!(reg.total_count(), 0);

    // second pass changes nothing
    reg.reset_all();
    assert_eq!(reg.total_count(), 0);
    assert_eq!(reg.len(), 2);
}

#[test]
fn clear_removes_all_labels() {
    let mut reg = CounterRegistry::with_labels(["a"]).unwrap();
    reg.increment("a").unwrap();

    reg.clear();
    assert!(reg.labels().is_empty());
    assert!(reg.count("a").is_err());

    // clearing an empty registry is a no-op
    reg.clear();
    assert!(reg.is_empty());
}

#[test]
fn add_counter_starts_at_zero() {
    let mut reg = CounterRegistry::new();
    reg.add_counter("hits").unwrap();
    assert!(reg.contains("hits"));
    assert_eq!(reg.count("hits").unwrap(), 0);
}

#[test]
fn add_then_remove_restores_the_label_set() {
    let mut reg = CounterRegistry::with_labels(["a", "b"]).unwrap();
    let mut before = reg.labels();
    before.sort_unstable();
    let before: Vec<String> = before.into_iter().map(String::from).collect();

    reg.add_counter("c").unwrap();
    reg.remove_counter("c").unwrap();

    let mut after = reg.labels();
    after.sort_unstable();
    let after: Vec<String> = after.into_iter().map(String::from).collect();
    assert_eq!(before, after);
}

#[test]
fn remove_counter_leaves_the_others() {
    let mut reg = CounterRegistry::with_labels(["a", "b"]).unwrap();
    reg.remove_counter("a").unwrap();
    assert!(!reg.contains("a"));
    assert!(reg.contains("b"));
    assert!(reg.count("a").is_err());
}

#[test]
fn labels_are_exact_match_strings() {
    let mut reg = CounterRegistry::new();
    reg.add_counter("Hits").unwrap();
    // no normalization: case and whitespace are significant
    assert!(reg.count("hits").is_err());
    assert!(reg.count("Hits ").is_err());
    assert_eq!(reg.count("Hits").unwrap(), 0);
}
