use serde::Deserialize;

use crate::config::ConfigError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedConfig {
    pub version: u32,

    #[serde(default)]
    pub counters: Vec<CounterSeed>,
}

impl SeedConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != 1 {
            return Err(ConfigError::UnsupportedVersion(self.version));
        }
        Ok(())
    }

    /// Seed labels in declaration order. Duplicates are not filtered here;
    /// registry construction rejects them.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.counters.iter().map(|c| c.label.as_str())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CounterSeed {
    pub label: String,
}
