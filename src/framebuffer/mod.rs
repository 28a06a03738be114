//! # Framebuffer Graphics Module
//!
//! Everything that turns bytes into pixels.
//!
//! ## Modules
//!
//! - `surface`: `Surface`, a bounds-checked view of the linear framebuffer
//! - `color`: `Color` type with the palette constants the terminal uses
//! - `font`: PSF1 bitmap font parsing and glyph rasterization
//!
//! ## Pixel Layout
//!
//! ```text
//! row y ─▶ base + y * pitch
//!          ┌────┬────┬────┬─────────┬──────────┐
//!          │ x0 │ x1 │ x2 │   ...   │ padding  │
//!          └────┴────┴────┴─────────┴──────────┘
//!           4 B  4 B  4 B            pitch - 4 * width
//! ```
//!
//! Off-surface writes are dropped silently; nothing in this module reports
//! a clipped pixel as an error.

pub mod color;
pub mod font;
pub mod surface;

pub use color::Color;
pub use font::{Font, FontError, FONT_DATA};
pub use surface::{
    framebuffer_geometry, surface_from_boot_info, FramebufferGeometry, PixelLayout, Surface,
    SurfaceError,
};
