use core::fmt;

use crate::framebuffer::{FontError, SurfaceError};

/// Everything that can stop the kernel before the terminal is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    MissingFramebuffer,
    UnsupportedPixelFormat,
    Surface(SurfaceError),
    Font(FontError),
    ScreenTooSmall,
    AlreadyArmed,
}

impl From<FontError> for InitError {
    fn from(err: FontError) -> Self {
        InitError::Font(err)
    }
}

impl From<SurfaceError> for InitError {
    fn from(err: SurfaceError) -> Self {
        InitError::Surface(err)
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::MissingFramebuffer => write!(f, "bootloader provided no framebuffer"),
            InitError::UnsupportedPixelFormat => write!(f, "framebuffer is not 32-bit RGB/BGR"),
            InitError::Surface(SurfaceError::PitchTooSmall { pitch, width }) => {
                write!(f, "pitch {} too small for width {}", pitch, width)
            }
            InitError::Surface(SurfaceError::BufferTooSmall { len, required }) => {
                write!(f, "framebuffer is {} bytes, need {}", len, required)
            }
            InitError::Font(err) => write!(f, "{}", err),
            InitError::ScreenTooSmall => write!(f, "screen cannot hold a single glyph"),
            InitError::AlreadyArmed => write!(f, "keyboard pipeline already armed"),
        }
    }
}
