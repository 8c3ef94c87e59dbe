//! Off-screen frame the menu system renders into.
//!
//! [`FrameBuffer`] is a concrete [`DrawTarget`] over an owned RGB565 pixel
//! buffer. Applications draw into it through `&mut FrameBuffer`, which keeps
//! the [`Application`](crate::application::Application) trait object-safe
//! (`DrawTarget` itself has generic methods and cannot be a trait object).
//! The demo presents the finished frame to the simulator window once per
//! loop iteration.

use embedded_graphics::{
    Pixel,
    pixelcolor::{Rgb565, raw::RawU16},
    prelude::*,
    primitives::Rectangle,
};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Owned 240x240 RGB565 frame, row-major.
pub struct FrameBuffer {
    pixels: Vec<u16>,
}

impl FrameBuffer {
    /// Create a black frame.
    pub fn new() -> Self {
        Self {
            pixels: vec![0; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
        }
    }

    /// Fill the whole frame with one color.
    pub fn clear_to(&mut self, color: Rgb565) {
        let raw = RawU16::from(color).into_inner();
        self.pixels.fill(raw);
    }

    /// Read back one pixel. `None` outside the frame.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        if x < 0 || x >= SCREEN_WIDTH as i32 || y < 0 || y >= SCREEN_HEIGHT as i32 {
            return None;
        }
        let idx = y as usize * SCREEN_WIDTH as usize + x as usize;
        Some(Rgb565::from(RawU16::new(self.pixels[idx])))
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        if x >= 0 && x < SCREEN_WIDTH as i32 && y >= 0 && y < SCREEN_HEIGHT as i32 {
            let idx = y as usize * SCREEN_WIDTH as usize + x as usize;
            self.pixels[idx] = RawU16::from(color).into_inner();
        }
    }

    /// Copy the finished frame to a display.
    pub fn present<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        display.fill_contiguous(
            &Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
            self.pixels.iter().map(|&raw| Rgb565::from(RawU16::new(raw))),
        )
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        for (point, color) in area.points().zip(colors) {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        let drawable = area.intersection(&self.bounding_box());
        if drawable.size == Size::zero() {
            return Ok(());
        }
        let raw = RawU16::from(color).into_inner();
        let x0 = drawable.top_left.x as usize;
        let x1 = x0 + drawable.size.width as usize;
        for row in 0..drawable.size.height as usize {
            let y = drawable.top_left.y as usize + row;
            let start = y * SCREEN_WIDTH as usize;
            self.pixels[start + x0..start + x1].fill(raw);
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, PRIMARY, WHITE};

    #[test]
    fn test_new_frame_is_black() {
        let fb = FrameBuffer::new();
        assert_eq!(fb.pixel(0, 0), Some(BLACK), "fresh frame should be black");
        assert_eq!(fb.pixel(239, 239), Some(BLACK), "fresh frame should be black");
    }

    #[test]
    fn test_clear_to_fills_everything() {
        let mut fb = FrameBuffer::new();
        fb.clear_to(PRIMARY);
        assert_eq!(fb.pixel(0, 0), Some(PRIMARY));
        assert_eq!(fb.pixel(120, 120), Some(PRIMARY));
        assert_eq!(fb.pixel(239, 239), Some(PRIMARY));
    }

    #[test]
    fn test_draw_iter_sets_pixels() {
        let mut fb = FrameBuffer::new();
        fb.draw_iter([Pixel(Point::new(5, 7), WHITE)]).unwrap();
        assert_eq!(fb.pixel(5, 7), Some(WHITE), "drawn pixel should read back");
        assert_eq!(fb.pixel(6, 7), Some(BLACK), "neighbor should be untouched");
    }

    #[test]
    fn test_out_of_bounds_pixels_ignored() {
        let mut fb = FrameBuffer::new();
        fb.draw_iter([
            Pixel(Point::new(-1, 0), WHITE),
            Pixel(Point::new(0, -1), WHITE),
            Pixel(Point::new(240, 0), WHITE),
            Pixel(Point::new(0, 240), WHITE),
        ])
        .unwrap();
        assert_eq!(fb.pixel(0, 0), Some(BLACK), "out-of-bounds draws must not wrap");
        assert_eq!(fb.pixel(239, 0), Some(BLACK));
    }

    #[test]
    fn test_pixel_out_of_bounds_is_none() {
        let fb = FrameBuffer::new();
        assert_eq!(fb.pixel(-1, 0), None);
        assert_eq!(fb.pixel(240, 0), None);
        assert_eq!(fb.pixel(0, 240), None);
    }

    #[test]
    fn test_fill_solid_clamps_to_frame() {
        let mut fb = FrameBuffer::new();
        // Rectangle hanging off the bottom-right corner
        fb.fill_solid(
            &Rectangle::new(Point::new(230, 230), Size::new(20, 20)),
            WHITE,
        )
        .unwrap();
        assert_eq!(fb.pixel(230, 230), Some(WHITE));
        assert_eq!(fb.pixel(239, 239), Some(WHITE));
        assert_eq!(fb.pixel(229, 230), Some(BLACK), "left of the rectangle untouched");
    }

    #[test]
    fn test_present_into_another_frame() {
        let mut src = FrameBuffer::new();
        src.clear_to(PRIMARY);
        src.draw_iter([Pixel(Point::new(10, 10), WHITE)]).unwrap();

        // FrameBuffer is itself a DrawTarget, which makes a convenient sink
        let mut dst = FrameBuffer::new();
        src.present(&mut dst).unwrap();

        assert_eq!(dst.pixel(10, 10), Some(WHITE));
        assert_eq!(dst.pixel(0, 0), Some(PRIMARY));
    }
}
