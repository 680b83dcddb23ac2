//! Target dispatcher: decode, execute, advance time, write back.
//!
//! The dispatcher routes each payload to one of four pure arithmetic units and
//! charges the unit's configured latency to the simulation clock:
//!
//! | Command | Result              | Latency (default) |
//! |---------|---------------------|-------------------|
//! | ADD     | `x + y` (wrapping)  | 10 units          |
//! | SUB     | `x - y` (wrapping)  | 11 units          |
//! | EQ      | `(x == y) as i32`   | 4 units           |
//! | REM     | `x % y`             | 15 units          |
//!
//! Errors never advance the clock: a rejected transaction consumes no simulated
//! time and leaves the payload's result slot unset.

use tracing::{debug, warn};

use crate::common::{SimClock, SimTime, TransactionError};
use crate::config::{Config, LatencyConfig};
use crate::protocol::{Command, Frame, Payload};
use crate::target::stats::DispatchStats;

/// The hardware-side target executing arithmetic transactions.
#[derive(Debug)]
pub struct Target {
    latency: LatencyConfig,
    trace: bool,
    stats: DispatchStats,
}

impl Target {
    /// Creates a target with the given configuration's latency table.
    pub fn new(config: &Config) -> Self {
        Self {
            latency: config.latency.clone(),
            trace: config.general.trace_transactions,
            stats: DispatchStats::default(),
        }
    }

    /// Executes one transaction: decodes the command, computes the result,
    /// advances the clock by the command's latency, and writes the result into
    /// the payload. Operands are not otherwise mutated.
    ///
    /// Returns the simulated time consumed by the operation.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::DivisionByZero`] for REM with a zero
    /// divisor. No result is produced and no time is advanced on error.
    pub fn dispatch(
        &mut self,
        payload: &mut Payload,
        clock: &mut SimClock,
    ) -> Result<SimTime, TransactionError> {
        let (x, y) = (payload.operand_x, payload.operand_y);
        let result = match payload.command {
            Command::Add => addition(x, y),
            Command::Sub => subtraction(x, y),
            Command::Eq => equality(x, y),
            Command::Rem => remainder(x, y).inspect_err(|e| {
                warn!(command = %payload.command, x, y, error = %e, "dispatch rejected");
                self.stats.record_error();
            })?,
        };

        let consumed = self.latency.for_command(payload.command);
        clock.advance(consumed);
        payload.result = Some(result);
        self.stats.record(payload.command, consumed);
        if self.trace {
            debug!(command = %payload.command, x, y, result, consumed = %consumed, "dispatched");
        }
        Ok(consumed)
    }

    /// Executes one transaction presented as a raw word frame, validating the
    /// frame shape and command code before dispatch and re-encoding the
    /// response frame afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::MalformedPayload`] or
    /// [`TransactionError::UnsupportedCommand`] from decoding, or any error
    /// from [`Target::dispatch`]. The clock is never advanced on error.
    pub fn dispatch_frame(
        &mut self,
        frame: &mut Frame,
        clock: &mut SimClock,
    ) -> Result<SimTime, TransactionError> {
        let mut payload = Payload::decode(frame).inspect_err(|e| {
            warn!(error = %e, "frame rejected");
            self.stats.record_error();
        })?;
        let consumed = self.dispatch(&mut payload, clock)?;
        *frame = payload.encode();
        Ok(consumed)
    }

    /// Returns the dispatch counters accumulated so far.
    pub const fn stats(&self) -> &DispatchStats {
        &self.stats
    }
}

fn addition(x: i32, y: i32) -> i32 {
    x.wrapping_add(y)
}

fn subtraction(x: i32, y: i32) -> i32 {
    x.wrapping_sub(y)
}

fn equality(x: i32, y: i32) -> i32 {
    (x == y) as i32
}

// wrapping_rem: i32::MIN % -1 wraps to 0 instead of overflowing.
fn remainder(x: i32, y: i32) -> Result<i32, TransactionError> {
    if y == 0 {
        return Err(TransactionError::DivisionByZero { dividend: x });
    }
    Ok(x.wrapping_rem(y))
}
