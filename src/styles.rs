//! Pre-computed text styles shared by the widget drawing code.
//!
//! Styles with fixed colors are `const` so nothing is rebuilt per frame.
//! Item labels and icons take their color from the item, so for those only
//! the font reference is shared: `MonoTextStyle::new(LABEL_FONT, item_color)`.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::WHITE;

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered with the baseline in the middle. Headings, gauge values, anything
/// anchored to a point rather than a text row.
pub const MIDDLE_CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Left-aligned, vertically centered. Item labels, footer clock.
pub const MIDDLE_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Item label font (6x10). Color comes from the item.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Icon glyph font (10x20). Color comes from the item.
pub const ICON_FONT: &MonoFont = &FONT_10X20;

/// Heading font (10x20). Faded per transition frame, so no fixed style.
pub const TITLE_FONT: &MonoFont = &FONT_10X20;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small white text. Gauge captions.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Medium white text (10x20). Header title.
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> =
    MonoTextStyle::new(&FONT_10X20, WHITE);

/// Large white text (`ProFont` 24pt). Gauge percentage values.
pub const VALUE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> =
    MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// Clock text (`ProFont` 18pt).
pub const CLOCK_STYLE: MonoTextStyle<'static, Rgb565> =
    MonoTextStyle::new(&PROFONT_18_POINT, WHITE);
