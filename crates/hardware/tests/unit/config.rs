//! Configuration Tests.
//!
//! Verifies defaults, partial-JSON overrides, and the latency lookup.

use cosim_core::common::SimTime;
use cosim_core::config::{Config, LatencyConfig};
use cosim_core::protocol::Command;

#[test]
fn config_defaults() {
    let config = Config::default();
    assert!(!config.general.trace_transactions);
    assert_eq!(config.latency.add, 10);
    assert_eq!(config.latency.sub, 11);
    assert_eq!(config.latency.eq, 4);
    assert_eq!(config.latency.rem, 15);
}

#[test]
fn latency_lookup_per_command() {
    let latency = LatencyConfig::default();
    assert_eq!(latency.for_command(Command::Add), SimTime::new(10));
    assert_eq!(latency.for_command(Command::Sub), SimTime::new(11));
    assert_eq!(latency.for_command(Command::Eq), SimTime::new(4));
    assert_eq!(latency.for_command(Command::Rem), SimTime::new(15));
}

#[test]
fn partial_json_keeps_defaults_for_absent_fields() {
    let config = Config::from_json(r#"{"latency":{"rem":20}}"#).unwrap();
    assert_eq!(config.latency.rem, 20);
    assert_eq!(config.latency.add, 10);
    assert!(!config.general.trace_transactions);
}

#[test]
fn empty_json_object_is_default() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.latency.eq, Config::default().latency.eq);
}

#[test]
fn malformed_json_is_an_error() {
    assert!(Config::from_json(r#"{"latency":{"add":"fast"}}"#).is_err());
    assert!(Config::from_json("not json").is_err());
}

#[test]
fn general_section_deserializes() {
    let config = Config::from_json(r#"{"general":{"trace_transactions":true}}"#).unwrap();
    assert!(config.general.trace_transactions);
}
