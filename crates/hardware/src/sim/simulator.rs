//! Simulator: owns the initiator, the channel-bound target, and the clock
//! side-by-side.
//!
//! Binding is static: one initiator is bound to one target at construction and
//! for the lifetime of the system. The clock lives here because the simulation
//! engine owns simulated time; the dispatcher advances it, the driver reads it
//! once at the end of the run.

use crate::channel::DirectChannel;
use crate::common::{SimClock, TransactionError};
use crate::config::Config;
use crate::initiator::{Initiator, Scenario};
use crate::report::Report;
use crate::target::{DispatchStats, Target};

/// Top-level co-simulator: initiator + channel(target) + clock.
#[derive(Debug)]
pub struct Simulator {
    initiator: Initiator,
    channel: DirectChannel,
    clock: SimClock,
}

impl Simulator {
    /// Builds a simulator running the given scenario under the given
    /// configuration.
    pub fn new(scenario: Scenario, config: &Config) -> Self {
        Self {
            initiator: Initiator::new(scenario),
            channel: DirectChannel::new(Target::new(config)),
            clock: SimClock::new(),
        }
    }

    /// Runs the scenario to completion and returns the verification report.
    ///
    /// # Errors
    ///
    /// Propagates fatal [`TransactionError`]s from the driver.
    pub fn run(&mut self) -> Result<Report, TransactionError> {
        self.initiator.run(&mut self.channel, &mut self.clock)
    }

    /// Returns the target's dispatch counters.
    pub const fn stats(&self) -> &DispatchStats {
        self.channel.target().stats()
    }
}
