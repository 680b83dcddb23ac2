//! Command enumeration and wire codes.
//!
//! Commands are the operations a target can execute. The wire code assignment
//! (0=ADD, 1=SUB, 2=EQ, 3=REM) is part of the external payload contract; any
//! other code is rejected at decode time, never silently executed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::TransactionError;

/// Wire code for the addition command.
pub const CMD_ADD: i32 = 0;
/// Wire code for the subtraction command.
pub const CMD_SUB: i32 = 1;
/// Wire code for the equality-test command.
pub const CMD_EQ: i32 = 2;
/// Wire code for the remainder command.
pub const CMD_REM: i32 = 3;

/// An arithmetic command executed by the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// Addition: `x + y`, wrapping on overflow.
    Add,
    /// Subtraction: `x - y`, wrapping on overflow.
    Sub,
    /// Equality test: `1` if `x == y`, else `0`.
    Eq,
    /// Remainder: `x % y`; a zero divisor is a `DivisionByZero` error.
    Rem,
}

impl Command {
    /// Returns the command's wire code.
    #[inline(always)]
    pub const fn code(self) -> i32 {
        match self {
            Self::Add => CMD_ADD,
            Self::Sub => CMD_SUB,
            Self::Eq => CMD_EQ,
            Self::Rem => CMD_REM,
        }
    }

    /// Returns the command's short mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Eq => "eq",
            Self::Rem => "rem",
        }
    }
}

impl TryFrom<i32> for Command {
    type Error = TransactionError;

    /// Decodes a wire code into a command, rejecting anything outside {0, 1, 2, 3}.
    fn try_from(code: i32) -> Result<Self, TransactionError> {
        match code {
            CMD_ADD => Ok(Self::Add),
            CMD_SUB => Ok(Self::Sub),
            CMD_EQ => Ok(Self::Eq),
            CMD_REM => Ok(Self::Rem),
            other => Err(TransactionError::UnsupportedCommand(other)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
