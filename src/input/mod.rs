//! # Input Event Module
//!
//! The seam between input decoding and whatever consumes characters.
//!
//! ```text
//! ┌──────────────┐   byte   ┌──────────────────────┐
//! │  PS/2 IRQ1   │─────────▶│  InputEventHandler   │
//! │  (decoder)   │          │  (terminal session)  │
//! └──────────────┘          └──────────────────────┘
//! ```
//!
//! Only one producer exists: the keyboard interrupt handler. Adding a
//! second one (timer redraw, another device) requires mutual exclusion
//! around the handler, e.g. masking IRQ1 while it runs.

pub mod events;

pub use events::*;
