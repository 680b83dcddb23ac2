//! Target unit tests.

/// Dispatcher behavior tests.
pub mod dispatcher;

/// Dispatch counter tests.
pub mod stats;
