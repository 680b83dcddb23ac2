//! Direct in-process channel from one initiator to one target.

use crate::channel::Transport;
use crate::common::{SimClock, SimTime, TransactionError};
use crate::protocol::Payload;
use crate::target::Target;

/// A static, zero-latency binding from one initiator to one target.
///
/// The channel owns the target for the lifetime of the system: there is no
/// dynamic rebinding and no fan-out. It adds no latency of its own; all
/// simulated time comes from the target's dispatcher.
#[derive(Debug)]
pub struct DirectChannel {
    target: Target,
    calls: u64,
}

impl DirectChannel {
    /// Binds a channel to the given target.
    pub const fn new(target: Target) -> Self {
        Self { target, calls: 0 }
    }

    /// Returns the number of calls carried so far.
    pub const fn calls(&self) -> u64 {
        self.calls
    }

    /// Returns the bound target.
    pub const fn target(&self) -> &Target {
        &self.target
    }
}

impl Transport for DirectChannel {
    fn b_transport(
        &mut self,
        payload: &mut Payload,
        clock: &mut SimClock,
    ) -> Result<SimTime, TransactionError> {
        self.calls += 1;
        self.target.dispatch(payload, clock)
    }
}
