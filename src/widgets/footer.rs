//! Bottom chrome bar: clock and status glyphs at the home screen, a back
//! hint once the user has descended into the tree.
//!
//! Like the header, the footer never animates with screen transitions.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};

use crate::colors::{DARK_SLATE, WHITE};
use crate::config::{FOOTER_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::styles::{CLOCK_STYLE, ICON_FONT, LABEL_FONT, MIDDLE_CENTERED, MIDDLE_LEFT};

/// Footer bar footprint.
const FOOTER_RECT: Rectangle = Rectangle::new(
    Point::new(0, (SCREEN_HEIGHT - FOOTER_HEIGHT) as i32),
    Size::new(SCREEN_WIDTH, FOOTER_HEIGHT),
);

/// Vertical center of the bar, where all footer text anchors.
const CENTER_Y: i32 = (SCREEN_HEIGHT - FOOTER_HEIGHT / 2) as i32;

/// Left anchor for the clock and the back hint.
const LEFT_X: i32 = 8;

/// Right anchor of the status glyph strip.
const STATUS_RIGHT_X: i32 = (SCREEN_WIDTH - 8) as i32;

/// Horizontal step between status glyphs.
const STATUS_STEP: i32 = 12;

const BAR_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(DARK_SLATE);

/// Draw the footer bar.
///
/// At `depth == 0` the bar shows the clock on the left and the `status`
/// glyphs on the right, newest first. Deeper in the tree the clock gives
/// way to a back chevron; status glyphs stay put.
pub fn draw_footer<D>(display: &mut D, depth: usize, clock: &str, status: &[(char, Rgb565)])
where
    D: DrawTarget<Color = Rgb565>,
{
    FOOTER_RECT.into_styled(BAR_FILL_STYLE).draw(display).ok();

    if depth == 0 {
        Text::with_text_style(clock, Point::new(LEFT_X, CENTER_Y), CLOCK_STYLE, MIDDLE_LEFT)
            .draw(display)
            .ok();
    } else {
        Text::with_text_style(
            "<",
            Point::new(LEFT_X, CENTER_Y),
            MonoTextStyle::new(ICON_FONT, WHITE),
            MIDDLE_LEFT,
        )
        .draw(display)
        .ok();
    }

    let mut buf = [0u8; 4];
    for (index, (glyph, color)) in status.iter().enumerate() {
        let x = STATUS_RIGHT_X - index as i32 * STATUS_STEP;
        Text::with_text_style(
            glyph.encode_utf8(&mut buf),
            Point::new(x, CENTER_Y),
            MonoTextStyle::new(LABEL_FONT, *color),
            MIDDLE_CENTERED,
        )
        .draw(display)
        .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::GREEN;
    use crate::framebuffer::FrameBuffer;

    fn row_has_color(frame: &FrameBuffer, color: Rgb565) -> bool {
        (0..SCREEN_WIDTH as i32).any(|x| frame.pixel(x, CENTER_Y) == Some(color))
    }

    #[test]
    fn test_footer_shows_clock_at_home() {
        let mut frame = FrameBuffer::new();
        draw_footer(&mut frame, 0, "12:34", &[]);

        assert_eq!(
            frame.pixel(120, (SCREEN_HEIGHT - 5) as i32),
            Some(DARK_SLATE),
            "bar fill"
        );
        assert!(row_has_color(&frame, WHITE), "clock digits should render");
    }

    #[test]
    fn test_footer_shows_back_hint_when_descended() {
        let mut frame = FrameBuffer::new();
        draw_footer(&mut frame, 2, "12:34", &[]);

        // The chevron hugs the left edge; the clock would reach much further
        let text_past_clock_start = (40..SCREEN_WIDTH as i32)
            .any(|x| frame.pixel(x, CENTER_Y) == Some(WHITE));
        assert!(!text_past_clock_start, "no clock when showing the back hint");
        assert!(
            (0..40).any(|x| frame.pixel(x, CENTER_Y) == Some(WHITE)),
            "back chevron should render"
        );
    }

    #[test]
    fn test_footer_status_glyphs_use_their_colors() {
        let mut frame = FrameBuffer::new();
        draw_footer(&mut frame, 0, "", &[('+', GREEN)]);
        assert!(row_has_color(&frame, GREEN), "status glyph color");
    }
}
