//! The device's button set and its routing into the menu widget.
//!
//! The hardware has three select keys beside the screen (one per page
//! slot), up/down paging keys on the right edge, and back/home keys under
//! the screen. The demo feeds this from simulator keycodes; firmware would
//! feed it from a keypad driver.

use log::debug;

use crate::menu::MenuWidget;

/// One physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Select keys beside the screen, top to bottom.
    TopLeft,
    MiddleLeft,
    BottomLeft,
    /// Paging keys.
    Up,
    Down,
    /// Keys under the screen.
    Back,
    Home,
}

impl Button {
    /// Page slot a select key maps to.
    #[inline]
    pub const fn slot(self) -> Option<usize> {
        match self {
            Button::TopLeft => Some(0),
            Button::MiddleLeft => Some(1),
            Button::BottomLeft => Some(2),
            _ => None,
        }
    }
}

/// Route one pressed button into the widget.
pub fn dispatch_button(widget: &mut MenuWidget, button: Button) {
    debug!("button pressed: {button:?}");
    match button {
        Button::TopLeft => widget.select(0),
        Button::MiddleLeft => widget.select(1),
        Button::BottomLeft => widget.select(2),
        Button::Up => widget.go_up(),
        Button::Down => widget.go_down(),
        Button::Back => widget.go_back(),
        Button::Home => widget.go_home(),
    }
}
