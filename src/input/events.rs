//! # Input Event Types
//!
//! Decoded key presses arrive as single bytes: printable ASCII plus the
//! control codes below. Key releases never produce an event.

pub const BACKSPACE: u8 = 0x08;
pub const TAB: u8 = b'\t';
pub const NEWLINE: u8 = b'\n';
pub const CARRIAGE_RETURN: u8 = b'\r';

/// Receiver of decoded characters
pub trait InputEventHandler {
    fn handle_input(&mut self, byte: u8);
}
