//! Compositor for the menu widget's screen area.
//!
//! The widget itself only decides *what* is on screen; this module turns a
//! [`TransitionView`] into pixels. Per frame it:
//!
//! - clears the widget area to black,
//! - draws the settled screen, or both sides of a running switch,
//! - overlays the scrollbar, which lives outside the transition container.
//!
//! # Update Strategy
//!
//! | View | Outgoing | Incoming |
//! |-----------------|----------------------------------|----------------------------------|
//! | Settled | (none) | opaque, no offset |
//! | Slide | offset toward exit, fading out | offset from entry edge, fading in |
//! | Swap, first half | fading down to black | not drawn |
//! | Swap, second half| not drawn | fading up from black |
//!
//! During a swap only the visible side is drawn: painting the other side at
//! fade zero would lay black shapes over it.
//!
//! # Clipping
//!
//! Menu pages are drawn through a clipped view of the frame, so a page
//! sliding out cannot touch the chrome rows or whatever sits beside the
//! widget area. Applications draw straight into the frame at their shifted
//! area; their switches only ever move horizontally, and the frame bounds
//! check catches the screen edges.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::animations::{self, OPAQUE};
use crate::colors::BLACK;
use crate::framebuffer::FrameBuffer;
use crate::menu::MenuWidget;
use crate::transition::{Direction, ScreenSnapshot, TransitionKind, TransitionView};
use crate::widgets;

/// Pixel offsets of the outgoing and incoming screens during a slide.
///
/// `direction` is the travel direction of the incoming screen: `Left` means
/// it enters from the right edge and pushes the outgoing screen out through
/// the left edge.
fn slide_offsets(size: Size, direction: Direction, progress: f32) -> (Point, Point) {
    let width = size.width as f32;
    let height = size.height as f32;
    let p = progress.clamp(0.0, 1.0);
    match direction {
        Direction::Left => (
            Point::new((-width * p).round() as i32, 0),
            Point::new((width * (1.0 - p)).round() as i32, 0),
        ),
        Direction::Right => (
            Point::new((width * p).round() as i32, 0),
            Point::new((-width * (1.0 - p)).round() as i32, 0),
        ),
        Direction::Up => (
            Point::new(0, (-height * p).round() as i32),
            Point::new(0, (height * (1.0 - p)).round() as i32),
        ),
        Direction::Down => (
            Point::new(0, (height * p).round() as i32),
            Point::new(0, (-height * (1.0 - p)).round() as i32),
        ),
    }
}

/// Draw the widget into `area` of `frame`.
pub(crate) fn draw_menu_widget(widget: &MenuWidget, frame: &mut FrameBuffer, area: Rectangle) {
    frame.fill_solid(&area, BLACK).ok();

    match widget.transition_view() {
        TransitionView::Settled(screen) => {
            draw_screen(widget, screen, frame, area, Point::zero(), OPAQUE);
        }
        TransitionView::Animating {
            kind,
            progress,
            outgoing,
            incoming,
        } => match kind {
            TransitionKind::Slide(direction) => {
                let (out_offset, in_offset) = slide_offsets(area.size, direction, progress);
                let (out_fade, in_fade) = animations::slide_fades(progress);
                draw_screen(widget, outgoing, frame, area, out_offset, out_fade);
                draw_screen(widget, incoming, frame, area, in_offset, in_fade);
            }
            TransitionKind::Swap => {
                let (out_fade, in_fade) = animations::swap_fades(progress);
                if out_fade > 0 {
                    draw_screen(widget, outgoing, frame, area, Point::zero(), out_fade);
                } else {
                    draw_screen(widget, incoming, frame, area, Point::zero(), in_fade);
                }
            }
            // Instant switches settle synchronously and never animate
            TransitionKind::Instant => {
                draw_screen(widget, incoming, frame, area, Point::zero(), OPAQUE);
            }
        },
    }

    if widget.is_scrollbar_visible() {
        widgets::draw_scrollbar(frame, area, widget.pages(), widget.page_index());
    }
}

/// Draw one side of the view at `offset` from `area`, faded by `fade`.
fn draw_screen(
    widget: &MenuWidget,
    screen: &ScreenSnapshot,
    frame: &mut FrameBuffer,
    area: Rectangle,
    offset: Point,
    fade: u8,
) {
    if fade == 0 {
        return;
    }
    let shifted = Rectangle::new(area.top_left + offset, area.size);
    match screen {
        ScreenSnapshot::Blank => {}
        ScreenSnapshot::Page(page) => {
            let mut clipped = frame.clipped(&area);
            widgets::draw_menu_page(&mut clipped, shifted, page, fade);
        }
        ScreenSnapshot::Application(id) => {
            if let Some(application) = widget.application_by_id(*id) {
                application.draw(frame, shifted, fade);
            }
        }
        ScreenSnapshot::DepartingApplication(application) => {
            application.draw(frame, shifted, fade);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::animations::fade_color;
    use crate::application::Application;
    use crate::colors::{CPU_GREEN, GRAY, GREEN, LIGHT_GRAY, PRIMARY};
    use crate::config::{MENU_ITEM_GAP, MENU_ITEM_HEIGHT, PAGE_AREA_HEIGHT};
    use crate::menu::types::{ActionResult, Item, Menu};

    fn widget_area() -> Rectangle {
        Rectangle::new(Point::new(0, 24), Size::new(240, PAGE_AREA_HEIGHT))
    }

    fn leaf(label: &str) -> Item {
        Item::action(label, || ActionResult::Nothing)
    }

    fn first_row_center() -> Point {
        let area = widget_area();
        Point::new(
            120,
            area.top_left.y + MENU_ITEM_GAP as i32 + MENU_ITEM_HEIGHT as i32 / 2,
        )
    }

    struct FillApp;

    impl Application for FillApp {
        fn draw(&self, frame: &mut FrameBuffer, area: Rectangle, fade: u8) {
            frame.fill_solid(&area, fade_color(GREEN, fade)).ok();
        }
    }

    #[test]
    fn test_slide_offsets_endpoints() {
        let size = Size::new(240, 192);
        for direction in [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ] {
            let (out_start, in_start) = slide_offsets(size, direction, 0.0);
            assert_eq!(out_start, Point::zero(), "{direction:?}: outgoing starts in place");
            assert_ne!(in_start, Point::zero(), "{direction:?}: incoming starts off-screen");

            let (out_end, in_end) = slide_offsets(size, direction, 1.0);
            assert_eq!(in_end, Point::zero(), "{direction:?}: incoming ends settled");
            assert_ne!(out_end, Point::zero(), "{direction:?}: outgoing ends off-screen");
        }
    }

    #[test]
    fn test_slide_offsets_directions() {
        let size = Size::new(240, 192);
        let (_, incoming) = slide_offsets(size, Direction::Left, 0.0);
        assert_eq!(incoming, Point::new(240, 0), "left slide enters from the right");
        let (_, incoming) = slide_offsets(size, Direction::Up, 0.0);
        assert_eq!(incoming, Point::new(0, 192), "up slide enters from the bottom");
    }

    #[test]
    fn test_settled_page_renders_items() {
        let mut widget = MenuWidget::new();
        widget.set_root_menu(Menu::headless("Main", vec![leaf("a"), leaf("b")]));

        let mut frame = FrameBuffer::new();
        widget.draw(&mut frame, widget_area());

        let p = first_row_center();
        assert_eq!(frame.pixel(p.x, p.y), Some(PRIMARY), "item background visible");
    }

    #[test]
    fn test_sliding_page_stays_inside_the_area() {
        let mut widget = MenuWidget::new();
        widget.set_root_menu(Menu::headless(
            "Main",
            vec![leaf("a"), leaf("b"), leaf("c"), leaf("d"), leaf("e")],
        ));
        widget.go_down();
        widget.tick(Duration::from_millis(100));
        assert!(widget.is_transitioning(), "slide should still be running");

        let mut frame = FrameBuffer::new();
        frame.clear_to(CPU_GREEN);
        widget.draw(&mut frame, widget_area());

        // Chrome row above and frame rows below the area stay untouched
        assert_eq!(frame.pixel(120, 10), Some(CPU_GREEN), "above the area");
        assert_eq!(frame.pixel(120, 230), Some(CPU_GREEN), "below the area");
    }

    #[test]
    fn test_swap_first_half_shows_faded_page() {
        let mut widget = MenuWidget::new();
        widget.set_root_menu(Menu::headless("Main", vec![leaf("a")]));
        widget.open_application(Box::new(FillApp));
        widget.tick(Duration::from_millis(50));

        let mut frame = FrameBuffer::new();
        widget.draw(&mut frame, widget_area());

        let p = first_row_center();
        let expected = fade_color(PRIMARY, animations::swap_fades(0.25).0);
        assert_eq!(frame.pixel(p.x, p.y), Some(expected), "page fading out");
    }

    #[test]
    fn test_swap_second_half_shows_faded_application() {
        let mut widget = MenuWidget::new();
        widget.set_root_menu(Menu::headless("Main", vec![leaf("a")]));
        widget.open_application(Box::new(FillApp));
        widget.tick(Duration::from_millis(150));

        let mut frame = FrameBuffer::new();
        widget.draw(&mut frame, widget_area());

        let expected = fade_color(GREEN, animations::swap_fades(0.75).1);
        assert_eq!(frame.pixel(120, 120), Some(expected), "application fading in");
    }

    #[test]
    fn test_scrollbar_only_on_multi_page_menus() {
        let area = widget_area();
        let track_x = area.top_left.x + area.size.width as i32 - 3;

        let mut widget = MenuWidget::new();
        widget.set_root_menu(Menu::headless("Main", vec![leaf("a")]));
        let mut frame = FrameBuffer::new();
        widget.draw(&mut frame, area);
        assert_eq!(frame.pixel(track_x, 120), Some(BLACK), "no scrollbar on one page");

        widget.set_root_menu(Menu::headless(
            "Main",
            vec![leaf("a"), leaf("b"), leaf("c"), leaf("d")],
        ));
        widget.draw(&mut frame, area);
        let shown = frame.pixel(track_x, 120);
        assert!(
            shown == Some(GRAY) || shown == Some(LIGHT_GRAY),
            "scrollbar track or thumb expected, got {shown:?}"
        );
    }
}
