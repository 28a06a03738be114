//! # Kernel Bring-up
//!
//! Boot sequence, fatal-error policy and the idle loop.
//!
//! ## Boot Phases
//!
//! | Phase            | Produces                 | Failure                         |
//! |------------------|--------------------------|---------------------------------|
//! | Display System   | `Surface`                | missing / unsupported framebuffer |
//! | Font             | `Font`                   | bad PSF1 magic, truncated data  |
//! | Terminal         | `Terminal` + first prompt| screen smaller than one glyph   |
//! | Interrupt System | armed keyboard pipeline  | pipeline already armed          |
//!
//! Every failure is fatal: there is nothing above the kernel to report to,
//! so the error is logged over serial and the CPU halts for good.

pub mod error;
pub mod init;

pub use error::InitError;
pub use init::{boot, fatal, halt, init_phase, init_terminal};
