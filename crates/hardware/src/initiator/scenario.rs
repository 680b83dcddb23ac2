//! Transaction records and scenarios.
//!
//! A scenario is the explicit data driving a verification run: an ordered list
//! of transaction records, each naming a command, its operands, and the
//! expected result. Records are created at the start of a run and never
//! mutated. Scenarios are ordinary data so alternate sequences can be
//! substituted without touching the dispatcher.

use serde::{Deserialize, Serialize};

use crate::protocol::Command;

/// One test case: a command, its operands, and the expected result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// The command to issue.
    pub command: Command,
    /// First operand.
    pub operand_x: i32,
    /// Second operand.
    pub operand_y: i32,
    /// The result the target is expected to return.
    pub expected: i32,
}

impl TransactionRecord {
    /// Creates a record.
    pub const fn new(command: Command, operand_x: i32, operand_y: i32, expected: i32) -> Self {
        Self {
            command,
            operand_x,
            operand_y,
            expected,
        }
    }
}

/// An ordered sequence of transaction records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scenario {
    /// The records, issued in order.
    pub transactions: Vec<TransactionRecord>,
}

impl Scenario {
    /// Wraps an ordered list of records.
    pub const fn new(transactions: Vec<TransactionRecord>) -> Self {
        Self { transactions }
    }

    /// The canonical ten-transaction reference sequence.
    pub fn reference() -> Self {
        use Command::{Add, Eq, Rem, Sub};
        Self::new(vec![
            TransactionRecord::new(Add, 4, 36, 40),
            TransactionRecord::new(Eq, 49, 55, 0),
            TransactionRecord::new(Rem, 20, 2, 0),
            TransactionRecord::new(Sub, 9, 12, -3),
            TransactionRecord::new(Add, 12, 1000, 1012),
            TransactionRecord::new(Rem, 5, 8, 5),
            TransactionRecord::new(Rem, 100, 7, 2),
            TransactionRecord::new(Sub, 125, 25, 100),
            TransactionRecord::new(Eq, 47, 47, 1),
            TransactionRecord::new(Add, 5, 6, 11),
        ])
    }

    /// Parses a scenario from a JSON array of records.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if the document is not a
    /// valid record array.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Number of records in the scenario.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns `true` if the scenario holds no records.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
