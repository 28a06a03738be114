//! # Interrupt Descriptor Table and Keyboard Handler
//!
//! The IDT carries a single present gate: vector 33, IRQ1 after remapping.
//! Exceptions and all other vectors are left empty.
//!
//! The handler relies on the platform interrupt ABI: registers are preserved
//! across the call and `iretq` resumes the preempted instruction. The
//! `x86-interrupt` calling convention provides exactly that.

use spin::{Lazy, Mutex};
use x86_64::structures::idt::{HandlerFunc, InterruptDescriptorTable, InterruptStackFrame};

use crate::{
    drivers::ps2_keyboard,
    interrupts::{pic::InterruptIndex, platform::X86Platform},
    terminal::Terminal,
};

/// The terminal the keyboard drives. Installed once before interrupts are
/// enabled; afterwards only `keyboard_interrupt_handler` locks it.
pub static SESSION: Mutex<Option<Terminal<'static>>> = Mutex::new(None);

static IDT: Lazy<InterruptDescriptorTable> =
    Lazy::new(|| keyboard_descriptor_table(keyboard_interrupt_handler));

/// A descriptor table with every slot empty except the keyboard vector,
/// which gets `handler` as a present, ring 0 interrupt gate on the running
/// code segment.
pub fn keyboard_descriptor_table(handler: HandlerFunc) -> InterruptDescriptorTable {
    let mut idt = InterruptDescriptorTable::new();
    idt[InterruptIndex::Keyboard.as_u8()].set_handler_fn(handler);
    idt
}

pub fn descriptor_table() -> &'static InterruptDescriptorTable {
    &IDT
}

/// Hand the terminal to the interrupt side. Must happen before the keyboard
/// line is unmasked.
pub fn install_session(terminal: Terminal<'static>) {
    x86_64::instructions::interrupts::without_interrupts(|| {
        *SESSION.lock() = Some(terminal);
    });
}

extern "x86-interrupt" fn keyboard_interrupt_handler(_stack_frame: InterruptStackFrame) {
    let mut platform = X86Platform::new();
    let mut session = SESSION.lock();

    let _forwarded = ps2_keyboard::service_interrupt(&mut platform, session.as_mut());

    #[cfg(feature = "debug-input")]
    if let Some(byte) = _forwarded {
        crate::serial_println!("IRQ: keyboard byte {:#04x}", byte);
    }
}
