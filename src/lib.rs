//! # CONIX kernel
//!
//! Interactive surface of a bare-metal x86_64 kernel: keyboard interrupts are
//! decoded into characters, fed through a line-editing terminal, and drawn
//! with a PSF1 bitmap font onto the bootloader's linear framebuffer.
//!
//! ```text
//! IRQ1 ──▶ drivers::ps2_keyboard ──▶ terminal::Terminal ──▶ framebuffer::font ──▶ Surface
//! ```
//!
//! All hardware access sits behind [`interrupts::InterruptPlatform`] and
//! [`framebuffer::Surface`], so everything except the boot glue runs under
//! the host test harness.

#![cfg_attr(not(test), no_std)]
#![feature(abi_x86_interrupt)]

pub mod serial;

pub mod drivers;
pub mod framebuffer;
pub mod input;
pub mod interrupts;
pub mod kernel;
pub mod terminal;
pub mod ui;
