//! # PSF1 Bitmap Font
//!
//! Parses the compiled-in PSF1 font and rasterizes glyphs onto a [`Surface`].
//!
//! ## Resource Layout
//!
//! | Offset                  | Size               | Meaning                    |
//! |-------------------------|--------------------|----------------------------|
//! | 0                       | 2                  | magic `0x36 0x04`          |
//! | 2                       | 1                  | mode (ignored)             |
//! | 3                       | 1                  | charsize = glyph height    |
//! | 4                       | 256 * charsize     | glyphs, one byte per row   |
//!
//! Glyphs are always 8 pixels wide; bit 7 of a row byte is the leftmost pixel.

use core::fmt;

use crate::framebuffer::{color::Color, surface::Surface};

/// The font the kernel renders with (8x16, PSF1).
pub static FONT_DATA: &[u8] = include_bytes!("../../assets/font.psf");

pub const PSF1_MAGIC: [u8; 2] = [0x36, 0x04];
const HEADER_LEN: usize = 4;
const GLYPH_COUNT: usize = 256;
const GLYPH_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontError {
    BadMagic { found: [u8; 2] },
    Truncated { len: usize, required: usize },
    /// charsize of 0: glyphs with no rows
    ZeroHeight,
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::BadMagic { found } => {
                write!(f, "not a PSF1 font (magic {:#04x} {:#04x})", found[0], found[1])
            }
            FontError::Truncated { len, required } => {
                write!(f, "font resource truncated ({} of {} bytes)", len, required)
            }
            FontError::ZeroHeight => write!(f, "font declares zero-height glyphs"),
        }
    }
}

/// A validated PSF1 font. Only obtainable through [`Font::parse`].
#[derive(Debug, Clone, Copy)]
pub struct Font<'a> {
    glyphs: &'a [u8],
    height: usize,
}

impl<'a> Font<'a> {
    pub fn parse(resource: &'a [u8]) -> Result<Self, FontError> {
        if resource.len() < HEADER_LEN {
            return Err(FontError::Truncated {
                len: resource.len(),
                required: HEADER_LEN,
            });
        }

        let magic = [resource[0], resource[1]];
        if magic != PSF1_MAGIC {
            return Err(FontError::BadMagic { found: magic });
        }

        let height = usize::from(resource[3]);
        if height == 0 {
            return Err(FontError::ZeroHeight);
        }
        let required = HEADER_LEN + GLYPH_COUNT * height;
        if resource.len() < required {
            return Err(FontError::Truncated {
                len: resource.len(),
                required,
            });
        }

        Ok(Self {
            glyphs: &resource[HEADER_LEN..required],
            height,
        })
    }

    pub fn width(&self) -> usize {
        GLYPH_WIDTH
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Glyph slot for a character code. Wraps instead of rejecting.
    pub fn glyph_index(code: u8) -> usize {
        usize::from(code) % GLYPH_COUNT
    }

    pub fn glyph(&self, code: u8) -> &'a [u8] {
        let start = Self::glyph_index(code) * self.height;
        &self.glyphs[start..start + self.height]
    }

    pub fn draw_char(&self, surface: &mut Surface, code: u8, x: usize, y: usize, fg: Color, bg: Color) {
        for (row, bits) in self.glyph(code).iter().enumerate() {
            let Some(py) = y.checked_add(row) else {
                return;
            };
            for col in 0..GLYPH_WIDTH {
                let Some(px) = x.checked_add(col) else {
                    break;
                };
                let set = (bits >> (7 - col)) & 1 != 0;
                // set_pixel clips anything past the right or bottom edge
                surface.set_pixel(px, py, if set { fg } else { bg });
            }
        }
    }

    pub fn draw_string(&self, surface: &mut Surface, text: &[u8], x: usize, y: usize, fg: Color, bg: Color) {
        for (i, &code) in text.iter().enumerate() {
            let Some(px) = i.checked_mul(GLYPH_WIDTH).and_then(|dx| x.checked_add(dx)) else {
                return;
            };
            self.draw_char(surface, code, px, y, fg, bg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::surface::PixelLayout;

    fn font() -> Font<'static> {
        Font::parse(FONT_DATA).expect("embedded font must parse")
    }

    #[test]
    fn test_embedded_font_dimensions() {
        let font = font();
        assert_eq!(font.width(), 8);
        assert_eq!(font.height(), 16);
    }

    #[test]
    fn test_bad_magic_rejected() {
        let mut data = FONT_DATA.to_vec();
        data[0] = 0x72;
        data[1] = 0xb5;
        assert_eq!(
            Font::parse(&data).err(),
            Some(FontError::BadMagic { found: [0x72, 0xb5] })
        );
    }

    #[test]
    fn test_truncated_resource_rejected() {
        assert_eq!(
            Font::parse(&[0x36]).err(),
            Some(FontError::Truncated { len: 1, required: 4 })
        );

        let data = &FONT_DATA[..FONT_DATA.len() - 1];
        assert_eq!(
            Font::parse(data).err(),
            Some(FontError::Truncated {
                len: FONT_DATA.len() - 1,
                required: 4 + 256 * 16,
            })
        );
    }

    #[test]
    fn test_zero_charsize_rejected() {
        assert_eq!(
            Font::parse(&[0x36, 0x04, 0x00, 0]).err(),
            Some(FontError::ZeroHeight)
        );
    }

    #[test]
    fn test_height_comes_from_charsize() {
        let mut data = vec![0u8; 4 + 256 * 8];
        data[..4].copy_from_slice(&[0x36, 0x04, 0x00, 8]);
        data[4 + 65 * 8] = 0xFF;
        let font = Font::parse(&data).unwrap();
        assert_eq!(font.height(), 8);
        assert_eq!(font.glyph(b'A')[0], 0xFF);
    }

    #[test]
    fn test_glyph_index_is_total() {
        for code in 0..=255u8 {
            let index = Font::glyph_index(code);
            assert!(index < 256);
            assert_eq!(index, code as usize);
        }
        let font = font();
        for code in 0..=255u8 {
            assert_eq!(font.glyph(code).len(), font.height());
        }
    }

    #[test]
    fn test_draw_char_msb_is_leftmost() {
        let mut data = vec![0u8; 4 + 256];
        data[..4].copy_from_slice(&[0x36, 0x04, 0x00, 1]);
        data[4 + b'x' as usize] = 0b1000_0001;
        let font = Font::parse(&data).unwrap();

        let mut buf = vec![0u8; 8 * 4];
        let mut surface = Surface::new(&mut buf, 8, 1, 32, PixelLayout::Bgr).unwrap();
        font.draw_char(&mut surface, b'x', 0, 0, Color::WHITE, Color::BLACK);

        assert_eq!(surface.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(surface.pixel(7, 0), Some(Color::WHITE));
        for x in 1..7 {
            assert_eq!(surface.pixel(x, 0), Some(Color::BLACK));
        }
    }

    #[test]
    fn test_draw_char_clips_at_edges() {
        let font = font();
        let mut buf = vec![0u8; 12 * 10 * 4];
        let mut surface = Surface::new(&mut buf, 12, 10, 48, PixelLayout::Bgr).unwrap();

        // 4 columns and 6 rows land on the surface, the rest is dropped
        font.draw_char(&mut surface, b' ', 8, 4, Color::WHITE, Color::TEAL);
        for y in 0..10 {
            for x in 0..12 {
                let expected = if x >= 8 && y >= 4 { Color::TEAL } else { Color::BLACK };
                assert_eq!(surface.pixel(x, y), Some(expected), "pixel ({}, {})", x, y);
            }
        }

        // entirely off-surface is a no-op, not a panic
        font.draw_char(&mut surface, b'A', 100, 100, Color::WHITE, Color::TEAL);
        font.draw_char(&mut surface, b'A', usize::MAX - 3, 0, Color::WHITE, Color::TEAL);
        font.draw_char(&mut surface, b'A', 0, usize::MAX - 3, Color::WHITE, Color::TEAL);
        font.draw_string(&mut surface, b"ABC", usize::MAX - 9, 0, Color::WHITE, Color::TEAL);
        assert_eq!(surface.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(surface.pixel(11, 9), Some(Color::TEAL));
    }

    #[test]
    fn test_draw_string_advances_by_glyph_width() {
        let font = font();
        let mut buf = vec![0u8; 24 * 16 * 4];
        let mut surface = Surface::new(&mut buf, 24, 16, 96, PixelLayout::Bgr).unwrap();
        font.draw_string(&mut surface, b"ABC", 0, 0, Color::WHITE, Color::BLACK);

        for (i, &code) in b"ABC".iter().enumerate() {
            for (row, bits) in font.glyph(code).iter().enumerate() {
                for col in 0..8 {
                    let lit = (bits >> (7 - col)) & 1 != 0;
                    let expected = if lit { Color::WHITE } else { Color::BLACK };
                    assert_eq!(surface.pixel(i * 8 + col, row), Some(expected));
                }
            }
        }
    }
}
