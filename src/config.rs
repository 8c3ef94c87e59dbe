//! Layout and timing constants.
//!
//! Geometry is fixed for the pod hardware (240x240 ST7789 behind three select
//! keys) and pre-computed as `const` so the drawing code never repeats the
//! arithmetic per frame.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (240x240 ST7789 panel).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Menu Geometry
// =============================================================================

/// Items shown per menu page. The three select keys sit beside the screen,
/// one per slot, so this matches the hardware.
pub const PAGE_SIZE: usize = 3;

/// Height of one menu item row in pixels.
pub const MENU_ITEM_HEIGHT: u32 = 52;

/// Vertical gap between menu item rows (and above the first row).
pub const MENU_ITEM_GAP: u32 = 7;

/// Width of a compact (`is_short`) item button.
pub const SHORT_WIDTH: u32 = 46;

/// Distance from the top of one item row to the top of the next.
pub const MENU_ITEM_STRIDE: u32 = MENU_ITEM_HEIGHT + MENU_ITEM_GAP;

/// Width reserved for the page scrollbar on the right edge of the menu area.
pub const SCROLLBAR_WIDTH: u32 = 6;

// =============================================================================
// Chrome Layout
// =============================================================================

/// Header bar height (menu title).
pub const HEADER_HEIGHT: u32 = 24;

/// Footer bar height (clock / status glyphs / back hint).
pub const FOOTER_HEIGHT: u32 = 24;

/// Height of the page area between header and footer. Fits three item rows
/// plus gaps.
pub const PAGE_AREA_HEIGHT: u32 = SCREEN_HEIGHT - HEADER_HEIGHT - FOOTER_HEIGHT;

/// Menu column width while the root menu is showing next to the gauges.
/// Navigating deeper expands the menu to the full screen width.
pub const MENU_WIDTH_COLLAPSED: u32 = 100;

// =============================================================================
// Transition Timing
// =============================================================================

/// Default duration of a page or sub-menu slide.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Duration of the swap when an application opens or closes.
pub const APP_TRANSITION_DURATION: Duration = Duration::from_millis(200);

/// Shortened duration used while more switches are waiting in the queue,
/// so a burst of navigation catches up instead of lagging behind the keys.
pub const QUEUED_TRANSITION_DURATION: Duration = Duration::from_millis(80);

// =============================================================================
// Frame Pacing
// =============================================================================

/// Frame period in high refresh mode (~50 FPS), used while transitions run.
pub const FRAME_TIME_HIGH: Duration = Duration::from_millis(20);

/// Frame period in low refresh mode (5 FPS), used while the screen is idle.
pub const FRAME_TIME_LOW: Duration = Duration::from_millis(200);
