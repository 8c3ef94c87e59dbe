//! Navigation stack frames.
//!
//! Pushing a sub-menu or an application parks whatever was current; popping
//! restores it, including the page a menu was left on.

use crate::application::{Application, ApplicationId};
use crate::menu::types::Menu;

/// One parked entry on the navigation stack.
pub enum StackFrame {
    /// A menu parked together with the page it was showing.
    Menu { menu: Menu, page_index: usize },

    /// A parked application, kept alive so popping back resumes it.
    Application {
        id: ApplicationId,
        application: Box<dyn Application>,
    },
}

impl StackFrame {
    #[inline]
    pub fn is_application(&self) -> bool {
        matches!(self, Self::Application { .. })
    }

    /// Id of the parked application, if this frame holds one.
    pub fn application_id(&self) -> Option<ApplicationId> {
        match self {
            Self::Application { id, .. } => Some(*id),
            Self::Menu { .. } => None,
        }
    }
}
