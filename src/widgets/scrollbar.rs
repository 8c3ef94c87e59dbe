//! Page position indicator along the right edge of the page area.
//!
//! The bar sits outside the transition container, so it never slides or
//! fades with the screens; it always reflects the settled page index.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};

use crate::colors::{GRAY, LIGHT_GRAY};
use crate::config::SCROLLBAR_WIDTH;

const CORNER_RADIUS: u32 = 3;

/// Smallest useful thumb, keeps it visible on menus with many pages.
const MIN_THUMB_HEIGHT: u32 = 6;

/// Draw the scrollbar against the right edge of `area`.
///
/// Single-page menus have nothing to scroll, so `pages < 2` draws nothing.
pub fn draw_scrollbar<D>(display: &mut D, area: Rectangle, pages: usize, page_index: usize)
where
    D: DrawTarget<Color = Rgb565>,
{
    if pages < 2 || area.size.width < SCROLLBAR_WIDTH || area.size.height < MIN_THUMB_HEIGHT {
        return;
    }

    let track = Rectangle::new(
        Point::new(
            area.top_left.x + area.size.width as i32 - SCROLLBAR_WIDTH as i32,
            area.top_left.y,
        ),
        Size::new(SCROLLBAR_WIDTH, area.size.height),
    );
    RoundedRectangle::with_equal_corners(track, Size::new(CORNER_RADIUS, CORNER_RADIUS))
        .into_styled(PrimitiveStyle::with_fill(GRAY))
        .draw(display)
        .ok();
    RoundedRectangle::with_equal_corners(
        thumb_rect(track, pages, page_index),
        Size::new(CORNER_RADIUS, CORNER_RADIUS),
    )
    .into_styled(PrimitiveStyle::with_fill(LIGHT_GRAY))
    .draw(display)
    .ok();
}

/// Thumb position within `track`: one `pages`-th of the height, offset
/// proportionally to `page_index`.
fn thumb_rect(track: Rectangle, pages: usize, page_index: usize) -> Rectangle {
    let height = (track.size.height / pages as u32).max(MIN_THUMB_HEIGHT);
    let offset = (track.size.height as i32 * page_index as i32 / pages as i32)
        .min(track.size.height as i32 - height as i32);
    Rectangle::new(
        Point::new(track.top_left.x, track.top_left.y + offset),
        Size::new(track.size.width, height),
    )
}
