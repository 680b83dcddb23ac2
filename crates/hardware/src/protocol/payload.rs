//! Payload structure and word-frame codec.
//!
//! The payload is the unit of exchange between initiator and target: a tagged
//! struct carrying the command, two signed 32-bit operands, and the result slot
//! the target populates. Exactly one payload is in flight at a time; the
//! initiator constructs it, lends the target write access for the duration of
//! one call, and regains exclusive access on return.
//!
//! The word-frame codec preserves the original buffer contract at the boundary:
//! a request is three integer slots `[command, x, y]`, a response four
//! `[command, x, y, result]`. Any other shape, byte-enable metadata, or a
//! streaming width smaller than the frame length is a fatal configuration
//! error. This is a deliberate one-shot-word restriction, not a general
//! partial-write mechanism.

use serde::{Deserialize, Serialize};

use crate::common::TransactionError;
use crate::protocol::Command;

/// Number of integer slots in a request frame (command, x, y).
pub const REQUEST_WORDS: usize = 3;
/// Number of integer slots in a response frame (command, x, y, result).
pub const RESPONSE_WORDS: usize = 4;

/// The request/response value exchanged in one transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// The operation to execute.
    pub command: Command,
    /// First operand.
    pub operand_x: i32,
    /// Second operand.
    pub operand_y: i32,
    /// Result slot: `None` before dispatch, `Some` after the target has executed.
    pub result: Option<i32>,
}

impl Payload {
    /// Builds a request payload with an unset result slot.
    pub const fn new(command: Command, operand_x: i32, operand_y: i32) -> Self {
        Self {
            command,
            operand_x,
            operand_y,
            result: None,
        }
    }

    /// Encodes this payload into a word frame.
    ///
    /// Produces a 3-slot request frame when the result is unset, or a 4-slot
    /// response frame once the target has written a result.
    pub fn encode(&self) -> Frame {
        let mut words = vec![self.command.code(), self.operand_x, self.operand_y];
        if let Some(result) = self.result {
            words.push(result);
        }
        Frame::full_width(words)
    }

    /// Decodes a word frame back into a payload.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::MalformedPayload`] if the frame is not
    /// exactly 3 or 4 slots, carries byte-enable metadata, or declares a
    /// streaming width smaller than its length; and
    /// [`TransactionError::UnsupportedCommand`] if the command slot holds a
    /// code outside the defined set.
    pub fn decode(frame: &Frame) -> Result<Self, TransactionError> {
        frame.check_shape()?;
        let command = Command::try_from(frame.words[0])?;
        Ok(Self {
            command,
            operand_x: frame.words[1],
            operand_y: frame.words[2],
            result: frame.words.get(RESPONSE_WORDS - 1).copied(),
        })
    }
}

/// A raw word buffer with the width metadata of the original transport contract.
///
/// Frames exist only at the boundary; everything past decode works on the typed
/// [`Payload`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Integer slots: `[command, x, y]` or `[command, x, y, result]`.
    pub words: Vec<i32>,
    /// Byte-enable lanes; must be absent (partial-width access is unsupported).
    pub byte_enable: Option<Vec<u8>>,
    /// Streaming width in slots; must cover the whole frame.
    pub streaming_width: usize,
}

impl Frame {
    /// Builds a full-width frame over the given slots (no byte enables, streaming
    /// width equal to the frame length).
    pub fn full_width(words: Vec<i32>) -> Self {
        let streaming_width = words.len();
        Self {
            words,
            byte_enable: None,
            streaming_width,
        }
    }

    /// Validates the frame shape against the one-shot-word contract.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::MalformedPayload`] describing the first
    /// violated rule.
    pub fn check_shape(&self) -> Result<(), TransactionError> {
        let len = self.words.len();
        if len != REQUEST_WORDS && len != RESPONSE_WORDS {
            return Err(TransactionError::MalformedPayload {
                reason: format!("expected {REQUEST_WORDS} or {RESPONSE_WORDS} slots, got {len}"),
            });
        }
        if self.byte_enable.is_some() {
            return Err(TransactionError::MalformedPayload {
                reason: "byte-enable metadata present; partial-width access unsupported".into(),
            });
        }
        if self.streaming_width < len {
            return Err(TransactionError::MalformedPayload {
                reason: format!(
                    "streaming width {} narrower than frame length {len}",
                    self.streaming_width
                ),
            });
        }
        Ok(())
    }
}
