//! Color fading for screen transitions.
//!
//! The display is Rgb565 with no alpha channel, so screen opacity is rendered
//! as a fade toward black. Sliding screens cross-fade linearly while they
//! move; the swap transition used for opening and closing applications fades
//! through black instead, outgoing down during the first half and incoming up
//! during the second, since its screens overlap fully. Every draw function
//! takes a `fade` factor (255 = fully visible, 0 = black) and passes its
//! colors through [`fade_color`] before drawing.
//!
//! Fading uses integer math on the raw 5/6/5 components; progression itself
//! is linear, easing curves are out of scope.

use embedded_graphics::{pixelcolor::Rgb565, prelude::IntoStorage};

use crate::colors::BLACK;

/// Fade factor for a fully visible screen.
pub const OPAQUE: u8 = 255;

/// Scale a color toward black. `fade` 255 keeps the color, 0 yields black.
#[inline]
pub fn fade_color(color: Rgb565, fade: u8) -> Rgb565 {
    if fade == OPAQUE {
        return color;
    }
    if fade == 0 {
        return BLACK;
    }

    // Rgb565: RRRRRGGGGGGBBBBB (5-6-5 bits)
    let raw = color.into_storage();
    let r = u32::from((raw >> 11) & 0x1F);
    let g = u32::from((raw >> 5) & 0x3F);
    let b = u32::from(raw & 0x1F);

    // scale = fade + 1 so that 255 maps to a full 256/256 pass-through
    let scale = u32::from(fade) + 1;
    let r = (r * scale) >> 8;
    let g = (g * scale) >> 8;
    let b = (b * scale) >> 8;

    Rgb565::new(r as u8, g as u8, b as u8)
}

/// Fade factors `(outgoing, incoming)` for a slide at the given progression.
///
/// The screens sit side by side while sliding, so both can be visible at
/// once and fade linearly past each other.
#[inline]
pub fn slide_fades(progression: f32) -> (u8, u8) {
    let p = progression.clamp(0.0, 1.0);
    let inc = (p * 255.0) as u8;
    (255 - inc, inc)
}

/// Fade factors `(outgoing, incoming)` for a swap at the given progression.
///
/// Progression runs 0.0..=1.0. Up to the halfway point only the outgoing
/// screen is visible, fading down; past it only the incoming screen is,
/// fading up. Both sides meet at black.
#[inline]
pub fn swap_fades(progression: f32) -> (u8, u8) {
    let p = progression.clamp(0.0, 1.0);
    if p < 0.5 {
        let out = ((1.0 - p * 2.0) * 255.0) as u8;
        (out, 0)
    } else {
        let inc = ((p * 2.0 - 1.0) * 255.0) as u8;
        (0, inc)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
