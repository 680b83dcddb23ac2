//! Configuration system for the co-simulator.
//!
//! This module defines the configuration structures used to parameterize a run:
//! 1. **Defaults:** The hardware latency model's baseline constants.
//! 2. **Structures:** General run options and the per-command latency table.
//!
//! Configuration is supplied as JSON (see [`Config::from_json`]) or via
//! `Config::default()`.

use serde::Deserialize;

use crate::common::SimTime;
use crate::protocol::Command;

/// Default configuration constants for the co-simulator.
///
/// The latency values reproduce the reference hardware model: the equality test
/// is the cheap operation, remainder the expensive one.
mod defaults {
    /// Simulated latency of the addition unit, in time units.
    pub const ADD_LATENCY: u64 = 10;

    /// Simulated latency of the subtraction unit, in time units.
    pub const SUB_LATENCY: u64 = 11;

    /// Simulated latency of the equality comparator, in time units.
    ///
    /// Cheaper than the arithmetic units: a comparator needs no carry chain.
    pub const EQ_LATENCY: u64 = 4;

    /// Simulated latency of the remainder unit, in time units.
    pub const REM_LATENCY: u64 = 15;
}

/// General run options.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Emit a `tracing` event for every dispatched transaction.
    pub trace_transactions: bool,
}

/// Per-command simulated latency table, in time units.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    /// Latency of ADD.
    pub add: u64,
    /// Latency of SUB.
    pub sub: u64,
    /// Latency of EQ.
    pub eq: u64,
    /// Latency of REM.
    pub rem: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            add: defaults::ADD_LATENCY,
            sub: defaults::SUB_LATENCY,
            eq: defaults::EQ_LATENCY,
            rem: defaults::REM_LATENCY,
        }
    }
}

impl LatencyConfig {
    /// Returns the configured latency for the given command.
    pub const fn for_command(&self, command: Command) -> SimTime {
        let units = match command {
            Command::Add => self.add,
            Command::Sub => self.sub,
            Command::Eq => self.eq,
            Command::Rem => self.rem,
        };
        SimTime::new(units)
    }
}

/// Root configuration structure.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General run options.
    pub general: GeneralConfig,
    /// Per-command latency table.
    pub latency: LatencyConfig,
}

impl Config {
    /// Parses a configuration from a JSON document; absent fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if the document is not valid
    /// JSON or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
