//! Rgb565 color constants for the pod display.
//!
//! Standard colors come from the `RgbColor` trait; the custom palette is the
//! pod UI's hex palette quantized to 5/6/5 components (8-bit channels shifted
//! down by 3/2/3 bits).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Default item label color.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure green. Active status glyphs in the footer.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow. Attention-colored items (home screen notifications entry).
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Palette
// =============================================================================

/// Primary accent blue (#2196F3). Default item background and low-importance
/// notification color.
pub const PRIMARY: Rgb565 = Rgb565::new(4, 37, 30);

/// Dark slate (#1F2933). Header and footer bar fill.
pub const DARK_SLATE: Rgb565 = Rgb565::new(3, 10, 6);

/// Mid gray (#ABA7A7). Scrollbar track.
pub const GRAY: Rgb565 = Rgb565::new(21, 41, 20);

/// Light gray (#D9D9D9). Scrollbar handle and gauge track ring.
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(27, 54, 27);

/// Gauge green (#24D636). CPU gauge fill.
pub const CPU_GREEN: Rgb565 = Rgb565::new(4, 53, 6);

/// Gauge orange (#D68F24). RAM gauge fill.
pub const RAM_ORANGE: Rgb565 = Rgb565::new(26, 35, 4);

/// Critical red (#D32F2F). Highest notification importance.
pub const CRITICAL_RED: Rgb565 = Rgb565::new(26, 11, 5);

/// Warning amber (#FFA000). High notification importance.
pub const WARNING_AMBER: Rgb565 = Rgb565::new(31, 40, 0);

/// Notice yellow (#FFEB3B). Medium notification importance.
pub const NOTICE_YELLOW: Rgb565 = Rgb565::new(31, 58, 7);
