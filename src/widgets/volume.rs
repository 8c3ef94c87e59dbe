//! Vertical volume bar, filled from the bottom.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, RoundedRectangle},
};

use crate::colors::{LIGHT_GRAY, PRIMARY};

const CORNER_RADIUS: u32 = 3;

const TRACK_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(LIGHT_GRAY);
const LEVEL_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(PRIMARY);

/// Draw the volume bar into `area`. `value` is a percentage, clamped to
/// 0..=100; the filled part grows upward from the bottom edge.
pub fn draw_volume_bar<D>(display: &mut D, area: Rectangle, value: f32)
where
    D: DrawTarget<Color = Rgb565>,
{
    if area.size.width < 2 * CORNER_RADIUS || area.size.height < 2 * CORNER_RADIUS {
        return;
    }

    RoundedRectangle::with_equal_corners(area, Size::new(CORNER_RADIUS, CORNER_RADIUS))
        .into_styled(TRACK_FILL)
        .draw(display)
        .ok();

    let fraction = value.clamp(0.0, 100.0) / 100.0;
    let fill_height = (area.size.height as f32 * fraction) as u32;
    if fill_height < CORNER_RADIUS {
        return;
    }
    let fill = Rectangle::new(
        Point::new(
            area.top_left.x,
            area.top_left.y + (area.size.height - fill_height) as i32,
        ),
        Size::new(area.size.width, fill_height),
    );
    RoundedRectangle::with_equal_corners(fill, Size::new(CORNER_RADIUS, CORNER_RADIUS))
        .into_styled(LEVEL_FILL)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;

    fn bar() -> Rectangle {
        Rectangle::new(Point::new(200, 40), Size::new(12, 100))
    }

    #[test]
    fn test_half_volume_fills_lower_half() {
        let mut frame = FrameBuffer::new();
        draw_volume_bar(&mut frame, bar(), 50.0);

        assert_eq!(frame.pixel(206, 60), Some(LIGHT_GRAY), "top half is track");
        assert_eq!(frame.pixel(206, 120), Some(PRIMARY), "bottom half is fill");
    }

    #[test]
    fn test_zero_volume_is_all_track() {
        let mut frame = FrameBuffer::new();
        draw_volume_bar(&mut frame, bar(), 0.0);
        assert_eq!(frame.pixel(206, 138), Some(LIGHT_GRAY));
    }

    #[test]
    fn test_full_volume_reaches_the_top() {
        let mut frame = FrameBuffer::new();
        draw_volume_bar(&mut frame, bar(), 100.0);
        assert_eq!(frame.pixel(206, 42), Some(PRIMARY));
    }
}
