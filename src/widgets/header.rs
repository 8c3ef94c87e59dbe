//! Top chrome bar with the title of whatever is on screen.
//!
//! The bar sits above the transition container and never animates. Fixed
//! geometry is pre-computed as constants, and the fill styles are const
//! (`PrimitiveStyle::with_fill` is const fn in embedded-graphics 0.8).

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};

use crate::colors::{DARK_SLATE, PRIMARY};
use crate::config::{HEADER_HEIGHT, SCREEN_WIDTH};
use crate::styles::{MIDDLE_CENTERED, TITLE_STYLE_WHITE};

/// Header bar footprint.
const HEADER_RECT: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, HEADER_HEIGHT));

/// One-pixel accent line along the bottom edge of the bar.
const ACCENT_RECT: Rectangle = Rectangle::new(
    Point::new(0, (HEADER_HEIGHT - 1) as i32),
    Size::new(SCREEN_WIDTH, 1),
);

/// Title anchor, centered in the bar.
const TITLE_POS: Point = Point::new((SCREEN_WIDTH / 2) as i32, (HEADER_HEIGHT / 2) as i32);

const BAR_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(DARK_SLATE);
const ACCENT_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(PRIMARY);

/// Draw the header bar. `None` leaves the bar empty, which is how untitled
/// applications present.
pub fn draw_header<D>(display: &mut D, title: Option<&str>)
where
    D: DrawTarget<Color = Rgb565>,
{
    HEADER_RECT.into_styled(BAR_FILL_STYLE).draw(display).ok();
    ACCENT_RECT.into_styled(ACCENT_FILL_STYLE).draw(display).ok();

    if let Some(title) = title {
        let mut clipped = display.clipped(&HEADER_RECT);
        Text::with_text_style(title, TITLE_POS, TITLE_STYLE_WHITE, MIDDLE_CENTERED)
            .draw(&mut clipped)
            .ok();
    }
}
