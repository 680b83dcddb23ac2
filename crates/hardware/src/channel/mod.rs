//! Transport channel: the blocking call contract between initiator and target.
//!
//! This module defines the seam over which transactions travel:
//! 1. **Trait:** [`Transport`], the synchronous blocking-call contract.
//! 2. **Binding:** [`DirectChannel`], the static one-initiator/one-target link.

/// Direct channel implementation.
pub mod direct;

/// Transport trait definition.
pub mod traits;

pub use direct::DirectChannel;
pub use traits::Transport;
