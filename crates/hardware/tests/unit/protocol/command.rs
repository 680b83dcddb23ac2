//! Command Unit Tests.
//!
//! Verifies wire code assignment, decode-with-rejection, and mnemonics.

use cosim_core::common::TransactionError;
use cosim_core::protocol::Command;

#[test]
fn command_wire_codes() {
    assert_eq!(Command::Add.code(), 0);
    assert_eq!(Command::Sub.code(), 1);
    assert_eq!(Command::Eq.code(), 2);
    assert_eq!(Command::Rem.code(), 3);
}

#[test]
fn command_decode_round_trip() {
    for cmd in [Command::Add, Command::Sub, Command::Eq, Command::Rem] {
        assert_eq!(Command::try_from(cmd.code()).unwrap(), cmd);
    }
}

#[test]
fn command_decode_rejects_unknown_codes() {
    for code in [-1, 4, 5, 100, i32::MAX, i32::MIN] {
        assert_eq!(
            Command::try_from(code),
            Err(TransactionError::UnsupportedCommand(code))
        );
    }
}

#[test]
fn command_mnemonics() {
    assert_eq!(Command::Add.mnemonic(), "add");
    assert_eq!(Command::Sub.mnemonic(), "sub");
    assert_eq!(Command::Eq.mnemonic(), "eq");
    assert_eq!(Command::Rem.mnemonic(), "rem");
    assert_eq!(Command::Rem.to_string(), "rem");
}

#[test]
fn command_serde_uses_mnemonics() {
    let json = serde_json::to_string(&Command::Eq).unwrap();
    assert_eq!(json, "\"eq\"");
    let back: Command = serde_json::from_str("\"rem\"").unwrap();
    assert_eq!(back, Command::Rem);
}
