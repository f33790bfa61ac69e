//! Monochrome framebuffer
//!
//! Pixels are stored the way SSD1306-class controllers expect them: the
//! screen is split into 8-pixel-tall pages, each page is one byte per
//! column, and bit 0 of a byte is the top row of the page.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Pixel, Size};

/// Display width in pixels
pub const WIDTH: usize = 128;

/// Display height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

/// 128x64 1-bit framebuffer
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a blank framebuffer
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        WIDTH as u32
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        HEIGHT as u32
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    /// Set a single pixel; coordinates outside the buffer are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, on: bool) {
        if x >= WIDTH as u32 || y >= HEIGHT as u32 {
            return;
        }
        let byte = &mut self.pages[(y / 8) as usize][x as usize];
        let mask = 1u8 << (y % 8);
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Read a single pixel; coordinates outside the buffer read as off
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= WIDTH as u32 || y >= HEIGHT as u32 {
            return false;
        }
        self.pages[(y / 8) as usize][x as usize] & (1 << (y % 8)) != 0
    }

    /// Raw bytes of one page
    pub fn page(&self, page: usize) -> &[u8; WIDTH] {
        &self.pages[page]
    }

    /// Number of pixels currently on
    pub fn lit_pixels(&self) -> u32 {
        self.pages
            .iter()
            .flat_map(|page| page.iter())
            .map(|byte| byte.count_ones())
            .sum()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            self.set_pixel(point.x as u32, point.y as u32, color.is_on());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn test_set_and_read_pixel() {
        let mut fb = FrameBuffer::new();
        assert!(!fb.pixel(10, 20));

        fb.set_pixel(10, 20, true);
        assert!(fb.pixel(10, 20));
        // y=20 lives in page 2, bit 4
        assert_eq!(fb.page(2)[10], 1 << 4);

        fb.set_pixel(10, 20, false);
        assert!(!fb.pixel(10, 20));
        assert_eq!(fb.lit_pixels(), 0);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(128, 0, true);
        fb.set_pixel(0, 64, true);
        assert_eq!(fb.lit_pixels(), 0);
        assert!(!fb.pixel(200, 200));
    }

    #[test]
    fn test_clear() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(0, 0, true);
        fb.set_pixel(127, 63, true);
        assert_eq!(fb.lit_pixels(), 2);

        fb.clear();
        assert_eq!(fb.lit_pixels(), 0);
    }

    #[test]
    fn test_draw_filled_rectangle() {
        let mut fb = FrameBuffer::new();
        Rectangle::new(Point::new(4, 6), Size::new(8, 8))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut fb)
            .unwrap();

        assert_eq!(fb.lit_pixels(), 64);
        assert!(fb.pixel(4, 6));
        assert!(fb.pixel(11, 13));
        assert!(!fb.pixel(12, 13));
        assert!(!fb.pixel(3, 6));
    }

    #[test]
    fn test_negative_coordinates_clipped() {
        let mut fb = FrameBuffer::new();
        Rectangle::new(Point::new(-4, -4), Size::new(8, 8))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut fb)
            .unwrap();

        assert_eq!(fb.lit_pixels(), 16);
        assert!(fb.pixel(0, 0));
        assert!(fb.pixel(3, 3));
    }
}
