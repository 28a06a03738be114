//! Bounds-checked view of the bootloader's linear framebuffer
use bootloader_api::{
    info::{FrameBufferInfo, PixelFormat},
    BootInfo,
};
use embedded_graphics::{
    primitives::{Primitive, PrimitiveStyle, Rectangle},
    Drawable,
};
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::Rgb888,
    Pixel,
};

use crate::{framebuffer::color::Color, kernel::InitError};

pub const BYTES_PER_PIXEL: usize = 4;

/// Byte order of one 32-bit pixel in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    /// `[b, g, r, 0]`, i.e. the little-endian encoding of `0x00RRGGBB`.
    Bgr,
    /// `[r, g, b, 0]`
    Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    PitchTooSmall { pitch: usize, width: usize },
    BufferTooSmall { len: usize, required: usize },
}

pub struct Surface<'a> {
    pixels: &'a mut [u8],
    width: usize,
    height: usize,
    pitch: usize,
    layout: PixelLayout,
}

impl<'a> Surface<'a> {
    /// Wrap a raw pixel buffer. `pitch` is in bytes.
    pub fn new(
        pixels: &'a mut [u8],
        width: usize,
        height: usize,
        pitch: usize,
        layout: PixelLayout,
    ) -> Result<Self, SurfaceError> {
        if pitch < width * BYTES_PER_PIXEL {
            return Err(SurfaceError::PitchTooSmall { pitch, width });
        }

        let required = pitch * height;
        if pixels.len() < required {
            return Err(SurfaceError::BufferTooSmall {
                len: pixels.len(),
                required,
            });
        }

        Ok(Self {
            pixels,
            width,
            height,
            pitch,
            layout,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pitch(&self) -> usize {
        self.pitch
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.pitch + x * BYTES_PER_PIXEL)
        } else {
            None
        }
    }

    /// Write one pixel. Coordinates outside the surface are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        let Some(offset) = self.offset(x, y) else {
            return;
        };

        let bytes = match self.layout {
            PixelLayout::Bgr => [color.b, color.g, color.r, 0],
            PixelLayout::Rgb => [color.r, color.g, color.b, 0],
        };
        self.pixels[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&bytes);
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        let offset = self.offset(x, y)?;
        let p = &self.pixels[offset..offset + BYTES_PER_PIXEL];

        Some(match self.layout {
            PixelLayout::Bgr => Color::new(p[2], p[1], p[0]),
            PixelLayout::Rgb => Color::new(p[0], p[1], p[2]),
        })
    }

    /// Fill entire surface with a color
    pub fn clear(&mut self, color: Color) {
        Rectangle::new(Point::zero(), self.size())
            .into_styled(PrimitiveStyle::with_fill(color.to_rgb888()))
            .draw(self)
            .ok();
    }
}

impl DrawTarget for Surface<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            self.set_pixel(x as usize, y as usize, Color::from(color));
        }
        Ok(())
    }
}

impl OriginDimensions for Surface<'_> {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

/// Shape of an accepted bootloader framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramebufferGeometry {
    pub width: usize,
    pub height: usize,
    /// Bytes per row
    pub pitch: usize,
    pub layout: PixelLayout,
}

/// Check a framebuffer description against what `Surface` can drive:
/// present, 32-bit pixels, RGB or BGR byte order.
pub fn framebuffer_geometry(info: Option<FrameBufferInfo>) -> Result<FramebufferGeometry, InitError> {
    let info = info.ok_or(InitError::MissingFramebuffer)?;

    let layout = match info.pixel_format {
        PixelFormat::Bgr => PixelLayout::Bgr,
        PixelFormat::Rgb => PixelLayout::Rgb,
        _ => return Err(InitError::UnsupportedPixelFormat),
    };
    if info.bytes_per_pixel != BYTES_PER_PIXEL {
        return Err(InitError::UnsupportedPixelFormat);
    }

    Ok(FramebufferGeometry {
        width: info.width,
        height: info.height,
        // stride is in pixels
        pitch: info.stride * info.bytes_per_pixel,
        layout,
    })
}

/// Take over the framebuffer the bootloader handed us.
pub fn surface_from_boot_info(boot_info: &'static mut BootInfo) -> Result<Surface<'static>, InitError> {
    let framebuffer = boot_info.framebuffer.as_mut();
    let geometry = framebuffer_geometry(framebuffer.as_ref().map(|fb| fb.info()))?;
    let framebuffer = framebuffer.ok_or(InitError::MissingFramebuffer)?;

    let surface = Surface::new(
        framebuffer.buffer_mut(),
        geometry.width,
        geometry.height,
        geometry.pitch,
        geometry.layout,
    )?;
    Ok(surface)
}
