//! Verification report: per-transaction outcomes plus total elapsed time.
//!
//! The report is pure data, produced once per run and consumed by an outer
//! reporting surface (the CLI renders it as text or JSON). Outcomes are
//! appended in issue order and never mutated afterwards.

use std::fmt;

use serde::Serialize;

use crate::common::SimTime;
use crate::initiator::TransactionRecord;

/// The outcome of one verified transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// The transaction record that was issued.
    pub transaction: TransactionRecord,
    /// The result the target returned, or `None` if the transaction was
    /// rejected (e.g. division by zero).
    pub actual: Option<i32>,
    /// Whether the actual result matched the expectation.
    pub passed: bool,
}

/// The ordered log of a verification run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Report {
    /// Per-transaction outcomes, in issue order.
    pub outcomes: Vec<Outcome>,
    /// Total simulated time elapsed over the run.
    pub total_elapsed: SimTime,
}

impl Report {
    /// Number of transactions that passed verification.
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Number of transactions that failed verification or were rejected.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// Returns `true` if every transaction passed.
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for o in &self.outcomes {
            let t = &o.transaction;
            let verdict = if o.passed { "correct" } else { "incorrect" };
            match o.actual {
                Some(actual) => writeln!(
                    f,
                    "Command: {} ({}, {}), Result: {} - {} (expected: {})",
                    t.command, t.operand_x, t.operand_y, actual, verdict, t.expected
                )?,
                None => writeln!(
                    f,
                    "Command: {} ({}, {}), Result: <rejected> - {} (expected: {})",
                    t.command, t.operand_x, t.operand_y, verdict, t.expected
                )?,
            }
        }
        writeln!(
            f,
            "{}/{} passed, total simulation time: {}",
            self.passed(),
            self.outcomes.len(),
            self.total_elapsed
        )
    }
}
