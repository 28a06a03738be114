//! Device drivers
//!
//! - `ps2_keyboard`: IRQ1 scancode decoding and the keyboard pipeline

pub mod ps2_keyboard;
