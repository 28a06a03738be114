//! # PS/2 Keyboard Driver
//!
//! Turns IRQ1 into characters for the terminal.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    IRQ1     ┌──────────────────┐
//! │  Keyboard   │────────────▶│ service_interrupt│
//! │  (Port 60)  │             │ - release? drop  │
//! └─────────────┘             │ - set-1 lookup   │
//!                             │ - unmapped? drop │
//!                             └────────┬─────────┘
//!                                      │ byte
//!                                      ▼
//!                          InputEventHandler::handle_input
//!                                      │
//!                                      ▼
//!                               EOI to PIC 1
//! ```
//!
//! ## Pipeline States
//!
//! `KeyboardPipeline` moves from `Uninitialized` to `Armed` exactly once,
//! in `init()`: install the IDT, remap the PICs, open IRQ1 only, then set
//! the interrupt flag. There is no way back.

use x86_64::structures::idt::InterruptDescriptorTable;

use crate::{
    input::{InputEventHandler, BACKSPACE, TAB},
    interrupts::{
        pic::{InterruptIndex, PIC_1_DATA, PIC_1_MASK, PIC_2_DATA, PIC_2_MASK},
        platform::InterruptPlatform,
    },
    kernel::InitError,
};

pub const KEYBOARD_DATA_PORT: u16 = 0x60;

const RELEASE_BIT: u8 = 0x80;

/// Set-1 scancodes to ASCII, US layout. `0` marks keys with no character
/// (Escape, Ctrl, Shift, Alt).
static SCANCODE_MAP: [u8; 58] = [
    0, 0, b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'0', b'-', b'=', BACKSPACE,
    TAB, b'q', b'w', b'e', b'r', b't', b'y', b'u', b'i', b'o', b'p', b'[', b']', b'\n',
    0, b'a', b's', b'd', b'f', b'g', b'h', b'j', b'k', b'l', b';', b'\'', b'`',
    0, b'\\', b'z', b'x', b'c', b'v', b'b', b'n', b'm', b',', b'.', b'/', 0,
    b'*', 0, b' ',
];

/// Character for a key press, `None` for releases and unmapped keys.
pub fn decode_scancode(scancode: u8) -> Option<u8> {
    if scancode & RELEASE_BIT != 0 {
        return None;
    }

    SCANCODE_MAP
        .get(usize::from(scancode))
        .copied()
        .filter(|&byte| byte != 0)
}

/// Body of the IRQ1 handler: read one scancode, forward its character (if
/// any) to `handler`, then acknowledge. The acknowledgement is sent on every
/// path, including when no handler is installed yet.
pub fn service_interrupt<P, H>(platform: &mut P, handler: Option<&mut H>) -> Option<u8>
where
    P: InterruptPlatform,
    H: InputEventHandler,
{
    let scancode = platform.read_port(KEYBOARD_DATA_PORT);

    let forwarded = decode_scancode(scancode).and_then(|byte| {
        let handler = handler?;
        handler.handle_input(byte);
        Some(byte)
    });

    platform.end_of_interrupt(InterruptIndex::Keyboard.as_u8());
    forwarded
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Uninitialized,
    Armed,
}

pub struct KeyboardPipeline<P: InterruptPlatform> {
    platform: P,
    state: PipelineState,
}

impl<P: InterruptPlatform> KeyboardPipeline<P> {
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            state: PipelineState::Uninitialized,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Arm keyboard interrupts. `table` must already hold the keyboard gate
    /// (see `interrupts::keyboard_descriptor_table`).
    pub fn init(&mut self, table: &'static InterruptDescriptorTable) -> Result<(), InitError> {
        if self.state == PipelineState::Armed {
            return Err(InitError::AlreadyArmed);
        }

        self.platform.disable_interrupts();
        self.platform.install_descriptor_table(table);

        self.platform.remap_controller();
        // the 8259 init sequence restores old masks, so ours go in after it
        self.platform.write_port(PIC_1_DATA, PIC_1_MASK);
        self.platform.write_port(PIC_2_DATA, PIC_2_MASK);

        self.state = PipelineState::Armed;
        self.platform.enable_interrupts();
        Ok(())
    }
}
