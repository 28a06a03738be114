//! # 8259 PIC Layout
//!
//! IRQ0-15 are remapped to vectors 32-47 so they clear the CPU exception
//! range. After the remap both data ports get fixed masks:
//!
//! | Port   | Mask        | Open lines  |
//! |--------|-------------|-------------|
//! | `0x21` | `1111_1101` | IRQ1 only   |
//! | `0xA1` | `1111_1111` | none        |
//!
//! Keyboard interrupts are therefore the only asynchronous entry into the
//! kernel.

pub const PIC_1_OFFSET: u8 = 32; // Primary PIC handles IRQs 0-7
pub const PIC_2_OFFSET: u8 = 40; // Secondary PIC handles IRQs 8-15

pub const PIC_1_DATA: u16 = 0x21;
pub const PIC_2_DATA: u16 = 0xA1;

/// 11111101: everything but IRQ1 masked
pub const PIC_1_MASK: u8 = !(1 << 1);
pub const PIC_2_MASK: u8 = 0xFF;

// Interrupt indices - these are the actual vector numbers the CPU sees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InterruptIndex {
    Keyboard = PIC_1_OFFSET + 1, // 33 - IRQ1
}

impl InterruptIndex {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
