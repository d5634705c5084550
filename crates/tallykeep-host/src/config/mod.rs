//! Seed config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io;

use thiserror::Error;

use tallykeep_core::error::TallyError;

pub use schema::{CounterSeed, SeedConfig};

/// Errors at the config boundary. Registry errors pass through unchanged so
/// hosts can still match on the core taxonomy.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("unsupported config version {0}")]
    UnsupportedVersion(u32),
    #[error(transparent)]
    Registry(#[from] TallyError),
}

pub fn load_from_file(path: &str) -> Result<SeedConfig, ConfigError> {
    let s = fs::read_to_string(path)?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<SeedConfig, ConfigError> {
    let cfg: SeedConfig = serde_yaml::from_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}
