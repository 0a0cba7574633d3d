//! Environment configuration for the server binary
//!
//! Every setting has a fixed fallback; only a set-but-malformed value is an
//! error, and that error is fatal at startup.

use std::time::Duration;

use podium_core::limits::{
    DEFAULT_PORT, DEFAULT_POPULATION, DEFAULT_UPDATE_BATCH, DEFAULT_UPDATE_INTERVAL,
};
use podium_core::{Error, Result};

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on. `PORT`, default 8080.
    pub port: u16,
    /// Participants to seed. `PODIUM_POPULATION`, default 10000.
    pub population: usize,
    /// Interval between update batches. `PODIUM_UPDATE_INTERVAL_SECS`,
    /// default 10.
    pub update_interval: Duration,
    /// Records perturbed per batch. `PODIUM_UPDATE_BATCH`, default 50.
    pub update_batch: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            population: DEFAULT_POPULATION,
            update_interval: DEFAULT_UPDATE_INTERVAL,
            update_batch: DEFAULT_UPDATE_BATCH,
        }
    }
}

impl ServerConfig {
    /// Read settings from the environment, falling back to defaults for
    /// unset variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: read_var("PORT", DEFAULT_PORT)?,
            population: read_var("PODIUM_POPULATION", DEFAULT_POPULATION)?,
            update_interval: Duration::from_secs(read_var(
                "PODIUM_UPDATE_INTERVAL_SECS",
                DEFAULT_UPDATE_INTERVAL.as_secs(),
            )?),
            update_batch: read_var("PODIUM_UPDATE_BATCH", DEFAULT_UPDATE_BATCH)?,
        })
    }
}

fn read_var<T: std::str::FromStr>(name: &str, fallback: T) -> Result<T> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Error::InvalidConfig(format!("{} must be a number, got {:?}", name, raw))),
        Err(std::env::VarError::NotPresent) => Ok(fallback),
        Err(e) => Err(Error::InvalidConfig(format!("{}: {}", name, e))),
    }
}
