//! Per-command dispatch counters.
//!
//! Tracks how many transactions the target has executed per command, how many
//! it has rejected, and the total simulated time its operations consumed.

use serde::Serialize;

use crate::common::SimTime;
use crate::protocol::Command;

/// Counters accumulated by the target across a run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DispatchStats {
    /// Total transactions executed successfully.
    pub dispatched: u64,
    /// ADD transactions executed.
    pub add: u64,
    /// SUB transactions executed.
    pub sub: u64,
    /// EQ transactions executed.
    pub eq: u64,
    /// REM transactions executed.
    pub rem: u64,
    /// Transactions rejected with an error.
    pub errors: u64,
    /// Total simulated time consumed by executed operations.
    pub time_consumed: SimTime,
}

impl DispatchStats {
    /// Records one successful dispatch of the given command.
    pub fn record(&mut self, command: Command, consumed: SimTime) {
        self.dispatched += 1;
        self.time_consumed += consumed;
        match command {
            Command::Add => self.add += 1,
            Command::Sub => self.sub += 1,
            Command::Eq => self.eq += 1,
            Command::Rem => self.rem += 1,
        }
    }

    /// Records one rejected transaction.
    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    /// Returns the executed count for one command.
    pub const fn count_for(&self, command: Command) -> u64 {
        match command {
            Command::Add => self.add,
            Command::Sub => self.sub,
            Command::Eq => self.eq,
            Command::Rem => self.rem,
        }
    }
}
