//! tallykeep core: the named-counter registry, its error surface, and the
//! snapshot view.
//!
//! This crate owns the label -> count mapping and every validated operation
//! on it. It intentionally carries no runtime or logging dependencies so it
//! can be embedded in any host application; shared access and configuration
//! live in `tallykeep-host`.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `TallyError`/`Result`, and no failed
//! operation leaves the registry partially mutated.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod registry;
pub mod snapshot;

pub use error::{ErrorKind, Result, TallyError};
pub use registry::CounterRegistry;
pub use snapshot::{CounterState, Snapshot};
