//! Verification driver.
//!
//! The driver issues a scenario's transactions in order over the transport
//! channel and verifies each returned result. A mismatch is recorded, not
//! corrected, and never retried: this is a verification harness, not a
//! self-healing system. A division-by-zero rejection fails only the offending
//! transaction; malformed payloads and unsupported commands abort the run.

use tracing::{debug, warn};

use crate::channel::Transport;
use crate::common::{SimClock, TransactionError};
use crate::initiator::Scenario;
use crate::protocol::Payload;
use crate::report::{Outcome, Report};

/// The software-side initiator driving a verification scenario.
#[derive(Debug)]
pub struct Initiator {
    scenario: Scenario,
}

impl Initiator {
    /// Creates a driver over the given scenario.
    pub const fn new(scenario: Scenario) -> Self {
        Self { scenario }
    }

    /// Returns the scenario this driver issues.
    pub const fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Runs the scenario to completion over the given channel.
    ///
    /// For each record in order: build a payload, invoke the blocking
    /// transport call, compare the returned result against the expectation,
    /// and append an outcome. After the full sequence, the clock's
    /// accumulated value becomes the report's total elapsed time.
    ///
    /// # Errors
    ///
    /// Propagates fatal [`TransactionError`]s (malformed payload, unsupported
    /// command). Division by zero is recorded as a failed outcome and the run
    /// continues.
    pub fn run<T: Transport>(
        &self,
        channel: &mut T,
        clock: &mut SimClock,
    ) -> Result<Report, TransactionError> {
        let mut outcomes = Vec::with_capacity(self.scenario.len());

        for record in &self.scenario.transactions {
            let mut payload = Payload::new(record.command, record.operand_x, record.operand_y);

            let actual = match channel.b_transport(&mut payload, clock) {
                Ok(_consumed) => payload.result,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!(command = %record.command, error = %e, "transaction failed");
                    None
                }
            };

            let passed = actual == Some(record.expected);
            if passed {
                debug!(command = %record.command, x = record.operand_x, y = record.operand_y,
                       result = record.expected, "verified");
            } else {
                warn!(command = %record.command, x = record.operand_x, y = record.operand_y,
                      expected = record.expected, ?actual, "verification mismatch");
            }
            outcomes.push(Outcome {
                transaction: record.clone(),
                actual,
                passed,
            });
        }

        Ok(Report {
            outcomes,
            total_elapsed: clock.now(),
        })
    }
}
