//! Full-screen application screens.
//!
//! An application is anything the menu widget can open on top of the menu
//! tree: it takes over the page area, receives the navigation keys, and may
//! expose its own items to the select keys. The widget polls
//! [`Application::is_closed`] every tick, so an application dismisses itself
//! by flipping that flag; external code closes one through
//! [`MenuWidget::close_application`](crate::menu::MenuWidget::close_application)
//! with the id handed out at open time.

use embedded_graphics::primitives::Rectangle;

use crate::framebuffer::FrameBuffer;
use crate::menu::types::Item;

/// Identity of one opened application instance, assigned by the menu widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApplicationId(u64);

impl ApplicationId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Contract for full-screen components opened from the menu.
pub trait Application {
    /// Title shown in the header while this application is current.
    fn title(&self) -> Option<&str> {
        None
    }

    /// Draw into `area`, dimmed by `fade` (255 = fully visible, 0 = black).
    ///
    /// Implementations must stay within `area` (header and footer live
    /// outside it) and pass their colors through
    /// [`fade_color`](crate::animations::fade_color) so open/close swaps
    /// render correctly.
    fn draw(&self, frame: &mut FrameBuffer, area: Rectangle, fade: u8);

    /// React to the up key.
    fn go_up(&mut self) {}

    /// React to the down key.
    fn go_down(&mut self) {}

    /// React to the back key. Return `true` when handled, which keeps the
    /// widget from popping this application.
    fn go_back(&mut self) -> bool {
        false
    }

    /// Item exposed to the select key of the given slot, if any.
    fn item(&self, slot: usize) -> Option<Item> {
        let _ = slot;
        None
    }

    /// Polled every tick; `true` asks the widget to close this application.
    fn is_closed(&self) -> bool {
        false
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
