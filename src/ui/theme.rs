use crate::framebuffer::Color;

/// Terminal colors, fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub foreground: Color,
    pub background: Color,
}

impl Theme {
    /// White on dark teal, the look the kernel boots with
    pub const fn conix() -> Self {
        Self {
            foreground: Color::WHITE,
            background: Color::TEAL,
        }
    }

    /// Plain white on black
    pub const fn classic() -> Self {
        Self {
            foreground: Color::WHITE,
            background: Color::BLACK,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::conix()
    }
}
