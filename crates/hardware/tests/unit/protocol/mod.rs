//! Protocol unit tests.

/// Command code and mnemonic tests.
pub mod command;
