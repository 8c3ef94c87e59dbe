//! Radial gauge for the home screen dashboard.
//!
//! A 270 degree dial with the gap at the bottom: the track runs from the
//! 7:30 position clockwise through 12 to 4:30, and the value arc covers the
//! matching fraction of it. The percentage sits in the middle of the dial
//! and the label underneath.

use core::fmt::Write;

use embedded_graphics::{
    geometry::Angle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Arc, PrimitiveStyle},
    text::Text,
};
use heapless::String;

use crate::colors::LIGHT_GRAY;
use crate::styles::{LABEL_STYLE_WHITE, MIDDLE_CENTERED, VALUE_STYLE_WHITE};

/// Angle of the 7:30 position, where the dial starts.
const DIAL_START_DEG: f32 = 225.0;

/// Full dial sweep. Negative runs clockwise.
const DIAL_SWEEP_DEG: f32 = -270.0;

const TRACK_STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(LIGHT_GRAY, 4);

/// Gap between the dial and its label underneath.
const LABEL_GAP: i32 = 12;

/// Draw one gauge. `value` is a percentage and gets clamped to 0..=100.
pub fn draw_gauge<D>(
    display: &mut D,
    center: Point,
    radius: u32,
    value: f32,
    label: &str,
    fill_color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if radius < 8 {
        return;
    }
    let value = value.clamp(0.0, 100.0);
    let diameter = radius * 2;

    Arc::with_center(
        center,
        diameter,
        Angle::from_degrees(DIAL_START_DEG),
        Angle::from_degrees(DIAL_SWEEP_DEG),
    )
    .into_styled(TRACK_STROKE)
    .draw(display)
    .ok();

    Arc::with_center(
        center,
        diameter,
        Angle::from_degrees(DIAL_START_DEG),
        Angle::from_degrees(DIAL_SWEEP_DEG * value / 100.0),
    )
    .into_styled(PrimitiveStyle::with_stroke(fill_color, 4))
    .draw(display)
    .ok();

    let mut text: String<8> = String::new();
    let _ = write!(text, "{value:.0}%");
    Text::with_text_style(&text, center, VALUE_STYLE_WHITE, MIDDLE_CENTERED)
        .draw(display)
        .ok();

    Text::with_text_style(
        label,
        Point::new(center.x, center.y + radius as i32 + LABEL_GAP),
        LABEL_STYLE_WHITE,
        MIDDLE_CENTERED,
    )
    .draw(display)
    .ok();
}
