//! Top-level facade crate for tallykeep.
//!
//! Re-exports the core registry and the host layer so users can depend on a
//! single crate.

pub mod core {
    pub use tallykeep_core::*;
}

pub mod host {
    pub use tallykeep_host::*;
}
