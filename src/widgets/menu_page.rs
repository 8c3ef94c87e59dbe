//! One page of menu items, laid out on the three-slot grid.
//!
//! The page area is a fixed grid of [`PAGE_SIZE`] row slots, each
//! [`MENU_ITEM_STRIDE`] tall. A heading block, when present, covers the top
//! two slots and pushes the page's single item into the bottom slot, which
//! keeps that item aligned with the same physical key across pages.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use crate::animations::fade_color;
use crate::colors::{LIGHT_GRAY, WHITE};
use crate::config::{MENU_ITEM_GAP, MENU_ITEM_STRIDE, PAGE_SIZE};
use crate::menu::MenuPage;
use crate::styles::{LABEL_FONT, MIDDLE_CENTERED, TITLE_FONT};
use crate::widgets::draw_menu_item;

/// Horizontal inset between the page area edge and the item buttons.
const ITEM_INSET: u32 = 2;

/// Line centers of the heading pair inside the two heading slots.
const HEADING_CENTER_Y: i32 = 40;
const SUB_HEADING_CENTER_Y: i32 = 68;

/// Draw a page into `area`, fading every element by `fade`.
pub fn draw_menu_page<D>(display: &mut D, area: Rectangle, page: &MenuPage, fade: u8)
where
    D: DrawTarget<Color = Rgb565>,
{
    if area.size.width < 2 * ITEM_INSET || area.size.height == 0 {
        return;
    }

    let first_slot = if let Some(heading) = page.heading() {
        let center_x = area.top_left.x + area.size.width as i32 / 2;
        Text::with_text_style(
            &heading.heading,
            Point::new(center_x, area.top_left.y + HEADING_CENTER_Y),
            MonoTextStyle::new(TITLE_FONT, fade_color(WHITE, fade)),
            MIDDLE_CENTERED,
        )
        .draw(display)
        .ok();
        Text::with_text_style(
            &heading.sub_heading,
            Point::new(center_x, area.top_left.y + SUB_HEADING_CENTER_Y),
            MonoTextStyle::new(LABEL_FONT, fade_color(LIGHT_GRAY, fade)),
            MIDDLE_CENTERED,
        )
        .draw(display)
        .ok();
        PAGE_SIZE - 1
    } else {
        0
    };

    let item_width = area.size.width - 2 * ITEM_INSET;
    for (index, item) in page.items().iter().enumerate() {
        let slot = first_slot + index;
        let y = MENU_ITEM_GAP as i32 + (slot as i32) * MENU_ITEM_STRIDE as i32;
        draw_menu_item(
            display,
            Point::new(area.top_left.x + ITEM_INSET as i32, area.top_left.y + y),
            item_width,
            item,
            fade,
        );
    }
}
