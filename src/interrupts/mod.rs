//! # Interrupt Handling Module
//!
//! Interrupt plumbing for the keyboard session:
//!
//! - **Platform**: the narrow hardware capability interface (`InterruptPlatform`)
//!   and its real x86_64 implementation
//! - **IDT**: descriptor table with exactly one live gate, IRQ1
//! - **PIC**: 8259 vector layout and mask values
//!
//! ## Interrupt Vector Layout
//!
//! | Vector | Type          | Handler                    |
//! |--------|---------------|----------------------------|
//! | 0-31   | CPU Exceptions| none installed             |
//! | 32     | Timer (IRQ0)  | masked                     |
//! | 33     | Keyboard (IRQ1)| keyboard_interrupt_handler|
//! | 34-255 | -             | none installed             |
//!
//! ## Usage
//!
//! ```ignore
//! interrupts::install_session(terminal);
//! let mut pipeline = KeyboardPipeline::new(X86Platform::new());
//! pipeline.init(interrupts::descriptor_table())?;
//! ```

pub mod pic;
pub mod interrupts;
pub mod platform;

pub use interrupts::{descriptor_table, install_session, keyboard_descriptor_table, SESSION};
pub use platform::{InterruptPlatform, X86Platform};
