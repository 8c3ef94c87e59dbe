//! A single menu item row.
//!
//! Items render as a rounded button filling one page slot: an optional icon
//! glyph on the left, the label beside it, both in the item's own colors.
//! Compact items ([`Item::is_short`]) shrink to [`SHORT_WIDTH`] and center
//! their content instead.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;

use crate::animations::fade_color;
use crate::config::{MENU_ITEM_HEIGHT, SHORT_WIDTH};
use crate::menu::types::Item;
use crate::styles::{ICON_FONT, LABEL_FONT, MIDDLE_CENTERED, MIDDLE_LEFT};

/// Corner radius of the item button.
const CORNER_RADIUS: u32 = 5;

/// Left padding before the icon or label.
const PADDING: i32 = 8;

/// Draw one item row with its top-left corner at `origin`.
///
/// `width` is the full row width; compact items ignore it and render
/// [`SHORT_WIDTH`] wide. Text is clipped to the button, long labels just cut
/// off.
pub fn draw_menu_item<D>(display: &mut D, origin: Point, width: u32, item: &Item, fade: u8)
where
    D: DrawTarget<Color = Rgb565>,
{
    let width = if item.is_short { SHORT_WIDTH } else { width };
    if width < 2 * CORNER_RADIUS {
        return;
    }
    let bounds = Rectangle::new(origin, Size::new(width, MENU_ITEM_HEIGHT));

    RoundedRectangle::with_equal_corners(bounds, Size::new(CORNER_RADIUS, CORNER_RADIUS))
        .into_styled(PrimitiveStyle::with_fill(fade_color(
            item.background_color,
            fade,
        )))
        .draw(display)
        .ok();

    let mut clipped = display.clipped(&bounds);
    let content_color = fade_color(item.color, fade);
    let icon_style = MonoTextStyle::new(ICON_FONT, content_color);
    let label_style = MonoTextStyle::new(LABEL_FONT, content_color);
    let center_y = origin.y + MENU_ITEM_HEIGHT as i32 / 2;

    if item.is_short {
        // Compact buttons show the icon alone when they have one.
        let center = Point::new(origin.x + width as i32 / 2, center_y);
        match &item.icon {
            Some(icon) => {
                Text::with_text_style(icon, center, icon_style, MIDDLE_CENTERED)
                    .draw(&mut clipped)
                    .ok();
            }
            None => {
                Text::with_text_style(&item.label, center, label_style, MIDDLE_CENTERED)
                    .draw(&mut clipped)
                    .ok();
            }
        }
        return;
    }

    let mut label_x = origin.x + PADDING;
    if let Some(icon) = &item.icon {
        Text::with_text_style(icon, Point::new(label_x, center_y), icon_style, MIDDLE_LEFT)
            .draw(&mut clipped)
            .ok();
        label_x += ICON_FONT.character_size.width as i32 + PADDING;
    }
    Text::with_text_style(
        &item.label,
        Point::new(label_x, center_y),
        label_style,
        MIDDLE_LEFT,
    )
    .draw(&mut clipped)
    .ok();
}
