//! Widget components for the menu display.
//!
//! This module organizes all visual components into logical submodules:
//!
//! - [`item`]: A single menu item row (rounded button, icon, label)
//! - [`menu_page`]: One page of items on the three-slot grid
//! - [`scrollbar`]: Page position indicator beside the page area
//! - [`header`]: Title bar above the transition container
//! - [`footer`]: Clock, status glyphs and the back hint below it
//! - [`gauge`]: Radial dials for the home screen dashboard
//! - [`volume`]: Vertical level bar
//!
//! # Architecture
//!
//! Widgets are free functions drawing into any `DrawTarget<Color = Rgb565>`.
//! The compositor in [`render`](crate::render) hands them either the frame
//! itself or a clipped view of it, so the same code draws settled screens
//! and both sides of a running transition. Screen content (pages, items)
//! takes a `fade` argument and runs every color through
//! [`fade_color`](crate::animations::fade_color); chrome widgets sit outside
//! the transition container and never fade.
//!
//! Fixed colors come from the const styles in [`styles`](crate::styles);
//! item rows build their two `MonoTextStyle`s per call because the colors
//! belong to the item.

mod footer;
mod gauge;
mod header;
mod item;
mod menu_page;
mod scrollbar;
mod volume;

pub use footer::draw_footer;
pub use gauge::draw_gauge;
pub use header::draw_header;
pub use item::draw_menu_item;
pub use menu_page::draw_menu_page;
pub use scrollbar::draw_scrollbar;
pub use volume::draw_volume_bar;
