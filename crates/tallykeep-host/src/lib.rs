//! tallykeep host layer.
//!
//! This crate wraps the core registry for embedding in a host application:
//! strict YAML seed configuration and a cloneable, lock-guarded shared
//! handle. Logging happens here, never in the core.

pub mod config;
pub mod shared;

pub use config::{ConfigError, SeedConfig};
pub use shared::SharedRegistry;
