//! Transport trait for the blocking transaction call.

use crate::common::{SimClock, SimTime, TransactionError};
use crate::protocol::Payload;

/// The synchronous, blocking call contract between initiator and target.
///
/// Control does not return to the caller until the target has fully executed
/// and the payload's result slot is populated. There is no queueing, overlap,
/// or reordering: the `&mut` receiver guarantees each call is fully serialized
/// with respect to the previous and next, with exactly one payload in flight.
pub trait Transport {
    /// Carries one transaction to the target and blocks until it completes.
    ///
    /// On success the payload's result slot is populated, the clock has
    /// advanced by the operation's latency, and that latency is returned.
    ///
    /// # Errors
    ///
    /// Propagates the target's [`TransactionError`]; the clock is never
    /// advanced on error.
    fn b_transport(
        &mut self,
        payload: &mut Payload,
        clock: &mut SimClock,
    ) -> Result<SimTime, TransactionError>;
}
