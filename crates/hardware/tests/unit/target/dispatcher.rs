//! Target Dispatcher Unit Tests.
//!
//! Verifies the closed-form result of each operation, the exact per-command
//! clock advance, error behavior (division by zero, unknown command), and the
//! dispatcher's purity aside from the clock side effect.

use proptest::prelude::*;
use rstest::rstest;

use cosim_core::common::{SimClock, SimTime, TransactionError};
use cosim_core::config::Config;
use cosim_core::protocol::{Command, Frame, Payload};
use cosim_core::target::Target;

use crate::common::harness::dispatch_one;

#[rstest]
#[case(Command::Add, 4, 36, 40, 10)]
#[case(Command::Sub, 9, 12, -3, 11)]
#[case(Command::Eq, 49, 55, 0, 4)]
#[case(Command::Eq, 47, 47, 1, 4)]
#[case(Command::Rem, 100, 7, 2, 15)]
fn dispatch_result_and_latency(
    #[case] command: Command,
    #[case] x: i32,
    #[case] y: i32,
    #[case] expected: i32,
    #[case] latency: u64,
) {
    let (result, elapsed) = dispatch_one(command, x, y);
    assert_eq!(result.unwrap(), expected);
    assert_eq!(elapsed, SimTime::new(latency));
}

#[test]
fn dispatch_writes_result_without_touching_operands() {
    let mut target = Target::new(&Config::default());
    let mut clock = SimClock::new();
    let mut payload = Payload::new(Command::Add, 12, 1000);
    let consumed = target.dispatch(&mut payload, &mut clock).unwrap();
    assert_eq!(payload.operand_x, 12);
    assert_eq!(payload.operand_y, 1000);
    assert_eq!(payload.result, Some(1012));
    assert_eq!(consumed, SimTime::new(10));
}

#[test]
fn clock_advance_is_additive() {
    let mut target = Target::new(&Config::default());
    let mut clock = SimClock::new();
    let sequence = [
        (Command::Add, 1, 2),  // 10
        (Command::Eq, 3, 3),   // 4
        (Command::Rem, 10, 3), // 15
        (Command::Sub, 5, 1),  // 11
    ];
    for (command, x, y) in sequence {
        let mut payload = Payload::new(command, x, y);
        let _ = target.dispatch(&mut payload, &mut clock).unwrap();
    }
    assert_eq!(clock.now(), SimTime::new(10 + 4 + 15 + 11));
}

#[test]
fn remainder_by_zero_is_rejected_without_clock_advance() {
    let (result, elapsed) = dispatch_one(Command::Rem, 42, 0);
    assert_eq!(
        result.unwrap_err(),
        TransactionError::DivisionByZero { dividend: 42 }
    );
    assert_eq!(elapsed, SimTime::ZERO);
}

#[test]
fn remainder_by_zero_leaves_result_unset() {
    let mut target = Target::new(&Config::default());
    let mut clock = SimClock::new();
    let mut payload = Payload::new(Command::Rem, 1, 0);
    assert!(target.dispatch(&mut payload, &mut clock).is_err());
    assert_eq!(payload.result, None);
}

#[test]
fn unknown_command_frame_is_rejected_without_clock_advance() {
    let mut target = Target::new(&Config::default());
    let mut clock = SimClock::new();
    let mut frame = Frame::full_width(vec![9, 1, 2]);
    assert_eq!(
        target.dispatch_frame(&mut frame, &mut clock).unwrap_err(),
        TransactionError::UnsupportedCommand(9)
    );
    assert_eq!(clock.now(), SimTime::ZERO);
    // The frame is not mutated on rejection.
    assert_eq!(frame.words, vec![9, 1, 2]);
}

#[test]
fn frame_dispatch_appends_result_slot() {
    let mut target = Target::new(&Config::default());
    let mut clock = SimClock::new();
    let mut frame = Frame::full_width(vec![0, 5, 6]);
    let consumed = target.dispatch_frame(&mut frame, &mut clock).unwrap();
    assert_eq!(frame.words, vec![0, 5, 6, 11]);
    assert_eq!(consumed, SimTime::new(10));
}

#[test]
fn add_and_sub_wrap_on_overflow() {
    let (result, _) = dispatch_one(Command::Add, i32::MAX, 1);
    assert_eq!(result.unwrap(), i32::MIN);
    let (result, _) = dispatch_one(Command::Sub, i32::MIN, 1);
    assert_eq!(result.unwrap(), i32::MAX);
}

#[test]
fn remainder_min_by_minus_one_wraps_to_zero() {
    let (result, elapsed) = dispatch_one(Command::Rem, i32::MIN, -1);
    assert_eq!(result.unwrap(), 0);
    assert_eq!(elapsed, SimTime::new(15));
}

#[test]
fn dispatch_is_idempotent_given_fresh_clock() {
    let first = dispatch_one(Command::Rem, 12345, 67);
    let second = dispatch_one(Command::Rem, 12345, 67);
    assert_eq!(first, second);
}

#[test]
fn configured_latency_overrides_default() {
    let config = Config::from_json(r#"{"latency":{"eq":5}}"#).unwrap();
    let mut target = Target::new(&config);
    let mut clock = SimClock::new();
    let mut payload = Payload::new(Command::Eq, 1, 1);
    assert_eq!(
        target.dispatch(&mut payload, &mut clock).unwrap(),
        SimTime::new(5)
    );
}

proptest! {
    #[test]
    fn add_matches_wrapping_closed_form(x in any::<i32>(), y in any::<i32>()) {
        let (result, elapsed) = dispatch_one(Command::Add, x, y);
        prop_assert_eq!(result.unwrap(), x.wrapping_add(y));
        prop_assert_eq!(elapsed, SimTime::new(10));
    }

    #[test]
    fn sub_matches_wrapping_closed_form(x in any::<i32>(), y in any::<i32>()) {
        let (result, _) = dispatch_one(Command::Sub, x, y);
        prop_assert_eq!(result.unwrap(), x.wrapping_sub(y));
    }

    #[test]
    fn eq_is_indicator_function(x in any::<i32>(), y in any::<i32>()) {
        let (result, _) = dispatch_one(Command::Eq, x, y);
        prop_assert_eq!(result.unwrap(), i32::from(x == y));
    }

    #[test]
    fn rem_matches_closed_form(x in any::<i32>(), y in any::<i32>().prop_filter("nonzero", |y| *y != 0)) {
        let (result, _) = dispatch_one(Command::Rem, x, y);
        prop_assert_eq!(result.unwrap(), x.wrapping_rem(y));
    }
}
