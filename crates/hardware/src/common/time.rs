//! Simulated time and the simulation clock.
//!
//! This module defines strong types for simulated durations to prevent accidental
//! mixing of simulated time with host wall-clock time. It provides:
//! 1. **Duration Type:** `SimTime`, an abstract count of time units advanced
//!    deterministically per operation.
//! 2. **Clock:** `SimClock`, the monotonically non-decreasing accumulator owned by
//!    the simulation engine and advanced as a side effect of dispatch calls.

use std::fmt;
use std::ops::{Add, AddAssign};

use serde::Serialize;

/// A simulated duration in abstract time units.
///
/// Simulated time is independent of real wall-clock time; it advances only when a
/// dispatched operation consumes its modeled latency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SimTime(pub u64);

impl SimTime {
    /// The zero duration.
    pub const ZERO: Self = Self(0);

    /// Creates a new duration from a raw unit count.
    #[inline(always)]
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// Returns the raw unit count.
    #[inline(always)]
    pub const fn units(&self) -> u64 {
        self.0
    }
}

impl Add for SimTime {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for SimTime {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} tu", self.0)
    }
}

/// The simulation clock: a monotonically non-decreasing duration accumulator.
///
/// The clock has a single writer (the target dispatcher, once per successful call)
/// and a single end-of-run reader (the initiator driver). Strict request/reply
/// serialization means no locking is needed; `&mut` threading enforces it.
#[derive(Debug, Default)]
pub struct SimClock {
    now: SimTime,
}

impl SimClock {
    /// Creates a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock by the given duration.
    pub fn advance(&mut self, delta: SimTime) {
        self.now += delta;
    }

    /// Returns the current simulated timestamp.
    #[inline(always)]
    pub const fn now(&self) -> SimTime {
        self.now
    }
}
