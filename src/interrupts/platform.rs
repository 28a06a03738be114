//! Hardware capabilities the input pipeline needs, and nothing more.
//!
//! Keeping port I/O, `lidt`, PIC programming and the interrupt flag behind
//! [`InterruptPlatform`] lets the pipeline run against a simulated backend.

use pic8259::ChainedPics;
use x86_64::{instructions::port::Port, structures::idt::InterruptDescriptorTable};

use crate::interrupts::pic::{PIC_1_OFFSET, PIC_2_OFFSET};

pub trait InterruptPlatform {
    fn read_port(&mut self, port: u16) -> u8;
    fn write_port(&mut self, port: u16, value: u8);
    /// Load the table into the IDT register.
    fn install_descriptor_table(&mut self, table: &'static InterruptDescriptorTable);
    /// Run the 8259 init sequence, moving IRQ0-15 to `PIC_1_OFFSET..PIC_2_OFFSET + 8`.
    fn remap_controller(&mut self);
    fn end_of_interrupt(&mut self, vector: u8);
    fn enable_interrupts(&mut self);
    fn disable_interrupts(&mut self);
}

/// The real thing: x86_64 port I/O and a pair of chained 8259s.
pub struct X86Platform {
    pics: ChainedPics,
}

impl X86Platform {
    pub const fn new() -> Self {
        Self {
            pics: unsafe { ChainedPics::new(PIC_1_OFFSET, PIC_2_OFFSET) },
        }
    }
}

impl Default for X86Platform {
    fn default() -> Self {
        Self::new()
    }
}

impl InterruptPlatform for X86Platform {
    fn read_port(&mut self, port: u16) -> u8 {
        let mut port = Port::<u8>::new(port);
        unsafe { port.read() }
    }

    fn write_port(&mut self, port: u16, value: u8) {
        let mut port = Port::<u8>::new(port);
        unsafe { port.write(value) }
    }

    fn install_descriptor_table(&mut self, table: &'static InterruptDescriptorTable) {
        table.load();
    }

    fn remap_controller(&mut self) {
        unsafe { self.pics.initialize() };
    }

    fn end_of_interrupt(&mut self, vector: u8) {
        unsafe { self.pics.notify_end_of_interrupt(vector) };
    }

    fn enable_interrupts(&mut self) {
        x86_64::instructions::interrupts::enable();
    }

    fn disable_interrupts(&mut self) {
        x86_64::instructions::interrupts::disable();
    }
}

/// Simulated hardware for host tests.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::{collections::VecDeque, vec::Vec};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Call {
        ReadPort(u16),
        WritePort(u16, u8),
        InstallDescriptorTable,
        RemapController,
        EndOfInterrupt(u8),
        EnableInterrupts,
        DisableInterrupts,
    }

    #[derive(Default)]
    pub struct MockPlatform {
        pub calls: Vec<Call>,
        /// Bytes returned by successive `read_port` calls
        pub port_data: VecDeque<u8>,
        pub installed: Option<&'static InterruptDescriptorTable>,
        pub interrupts_enabled: bool,
    }

    impl MockPlatform {
        pub fn with_scancodes(scancodes: &[u8]) -> Self {
            Self {
                port_data: scancodes.iter().copied().collect(),
                ..Self::default()
            }
        }

        pub fn end_of_interrupts(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, Call::EndOfInterrupt(_)))
                .count()
        }
    }

    impl InterruptPlatform for MockPlatform {
        fn read_port(&mut self, port: u16) -> u8 {
            self.calls.push(Call::ReadPort(port));
            self.port_data.pop_front().unwrap_or(0)
        }

        fn write_port(&mut self, port: u16, value: u8) {
            self.calls.push(Call::WritePort(port, value));
        }

        fn install_descriptor_table(&mut self, table: &'static InterruptDescriptorTable) {
            self.calls.push(Call::InstallDescriptorTable);
            self.installed = Some(table);
        }

        fn remap_controller(&mut self) {
            self.calls.push(Call::RemapController);
        }

        fn end_of_interrupt(&mut self, vector: u8) {
            self.calls.push(Call::EndOfInterrupt(vector));
        }

        fn enable_interrupts(&mut self) {
            self.calls.push(Call::EnableInterrupts);
            self.interrupts_enabled = true;
        }

        fn disable_interrupts(&mut self) {
            self.calls.push(Call::DisableInterrupts);
            self.interrupts_enabled = false;
        }
    }
}
