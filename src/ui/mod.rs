//! # User Interface Module
//!
//! Compile-time presentation settings for the terminal.
//!
//! ## Modules
//!
//! - `theme`: foreground/background color pairs (`conix`, `classic`)
//!
//! ## Example
//!
//! ```ignore
//! use crate::ui::Theme;
//!
//! let terminal = Terminal::new(surface, font, Theme::conix())?;
//! ```

pub mod theme;
pub use theme::Theme;
