//! Paginated hierarchical menu.
//!
//! [`MenuWidget`] drives a tree of menus on a small screen, three item slots
//! at a time:
//!
//! - [`types`]: The declarative menu tree (menus, items, actions)
//! - [`page`]: Page snapshots and the pagination arithmetic
//! - [`stack`]: Frames parked on the navigation stack
//!
//! Selecting an item either runs an action, descends into a sub-menu, or
//! opens a full-screen [`Application`]. Whatever was on screen is parked on
//! the stack and restored by [`MenuWidget::go_back`], including the page a
//! menu was left on. Every navigation step goes through the transition
//! engine, so rapid input queues up switches instead of jumping.
//!
//! The widget never draws on its own; the host calls [`MenuWidget::tick`]
//! with the elapsed time and then [`MenuWidget::draw`] each frame.

pub mod page;
pub mod stack;
pub mod types;

use std::time::Duration;

use embedded_graphics::primitives::Rectangle;
use log::{debug, warn};

use crate::application::{Application, ApplicationId};
use crate::config::{APP_TRANSITION_DURATION, TRANSITION_DURATION};
use crate::framebuffer::FrameBuffer;
use crate::render;
use crate::transition::{
    Direction,
    FixedFps,
    FpsController,
    ScreenSnapshot,
    TransitionKind,
    Transitioner,
    TransitionView,
};

pub use page::MenuPage;
pub use types::{ActionResult, Item, ItemKind, Menu};

use page::{build_page, page_count};
use stack::StackFrame;

/// Paginated menu over a hierarchy of menus and applications.
pub struct MenuWidget {
    stack: Vec<StackFrame>,
    current_menu: Option<Menu>,
    /// Items of `current_menu`, resolved once when the menu becomes current.
    current_items: Vec<Item>,
    current_application: Option<(ApplicationId, Box<dyn Application>)>,
    page_index: usize,
    next_application_id: u64,
    transitioner: Transitioner,
    fps: Box<dyn FpsController>,
}

impl Default for MenuWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuWidget {
    pub fn new() -> Self {
        Self::with_fps_controller(Box::new(FixedFps))
    }

    /// Widget wired to a display whose refresh rate it should steer while
    /// transitions are animating.
    pub fn with_fps_controller(fps: Box<dyn FpsController>) -> Self {
        Self {
            stack: Vec::new(),
            current_menu: None,
            current_items: Vec::new(),
            current_application: None,
            page_index: 0,
            next_application_id: 0,
            transitioner: Transitioner::new(),
            fps,
        }
    }

    // =========================================================================
    // Derived State
    // =========================================================================

    /// Depth of the current screen in the navigation hierarchy.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Number of pages of the currently active menu. Zero while an
    /// application is open or no menu is set.
    pub fn pages(&self) -> usize {
        match &self.current_menu {
            Some(menu) => page_count(self.current_items.len(), menu.is_headed()),
            None => 0,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Title of the current screen: the open application's title if one is
    /// open (which may be none), otherwise the current menu's.
    pub fn title(&self) -> Option<String> {
        if let Some((_, application)) = &self.current_application {
            return application.title().map(str::to_owned);
        }
        self.current_menu.as_ref().map(Menu::title)
    }

    /// The scrollbar only earns its column when there are pages to scroll.
    pub fn is_scrollbar_visible(&self) -> bool {
        self.current_application.is_none() && self.pages() > 1
    }

    /// Id of the application currently occupying the screen.
    pub fn current_application(&self) -> Option<ApplicationId> {
        self.current_application.as_ref().map(|(id, _)| *id)
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioner.is_transitioning()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Replace the whole hierarchy with a new root menu. The stack is
    /// cleared and the root's first page appears without a transition.
    pub fn set_root_menu(&mut self, root_menu: Menu) {
        self.stack.clear();
        self.page_index = 0;
        self.set_current_menu(root_menu);
        self.switch(TransitionKind::Instant, Duration::ZERO, None);
    }

    /// Go to the next page, wrapping around past the last one. Forwarded to
    /// the application when one is open.
    pub fn go_down(&mut self) {
        if let Some((_, application)) = &mut self.current_application {
            application.go_down();
            return;
        }
        let pages = self.pages();
        if pages <= 1 {
            return;
        }
        self.page_index = (self.page_index + 1) % pages;
        self.switch(
            TransitionKind::Slide(Direction::Up),
            TRANSITION_DURATION,
            None,
        );
    }

    /// Go to the previous page, wrapping around past the first one.
    /// Forwarded to the application when one is open.
    pub fn go_up(&mut self) {
        if let Some((_, application)) = &mut self.current_application {
            application.go_up();
            return;
        }
        let pages = self.pages();
        if pages <= 1 {
            return;
        }
        self.page_index = (self.page_index + pages - 1) % pages;
        self.switch(
            TransitionKind::Slide(Direction::Down),
            TRANSITION_DURATION,
            None,
        );
    }

    /// Activate the item in `slot` of the screen currently shown.
    ///
    /// Slots are counted from the top; on the first page of a headed menu
    /// only the bottom slot holds an item.
    pub fn select(&mut self, slot: usize) {
        let item = match self.transitioner.current_screen() {
            ScreenSnapshot::Blank => {
                warn!("select({slot}) ignored, no screen is shown");
                return;
            }
            ScreenSnapshot::DepartingApplication(_) => {
                warn!("select({slot}) ignored, the screen is closing");
                return;
            }
            ScreenSnapshot::Page(page) => {
                let Some(item) = page.item(slot) else {
                    warn!("select({slot}) ignored, the slot holds no item");
                    return;
                };
                item.clone()
            }
            ScreenSnapshot::Application(id) => {
                let Some(application) = self.application_by_id(*id) else {
                    warn!("select({slot}) ignored, the application is gone");
                    return;
                };
                let Some(item) = application.item(slot) else {
                    warn!("select({slot}) ignored, the slot holds no item");
                    return;
                };
                item
            }
        };

        match item.kind {
            ItemKind::Action(action) => match action() {
                ActionResult::Nothing => {}
                ActionResult::Menu(menu) => self.open_menu(menu),
                ActionResult::Application(application) => {
                    self.open_application(application);
                }
            },
            ItemKind::SubMenu(menu) => self.open_menu(menu),
            ItemKind::Application(launcher) => {
                self.open_application(launcher());
            }
        }
    }

    /// Return to whatever the current screen was opened from.
    ///
    /// An open application gets the first say and can swallow the event to
    /// do its own internal back navigation.
    pub fn go_back(&mut self) {
        if let Some((_, application)) = &mut self.current_application {
            if application.go_back() {
                return;
            }
        }
        self.pop();
    }

    /// Unwind the whole stack back to the root screen in one step.
    ///
    /// Applications parked along the way are dropped. A no-op at the root.
    pub fn go_home(&mut self) {
        let Some(root) = std::mem::take(&mut self.stack).into_iter().next() else {
            return;
        };
        let departing = self.take_current_application();
        debug!("unwinding to the root screen");
        self.restore_frame(root, departing);
    }

    /// Re-resolve the current menu's items, for menus whose item source is
    /// dynamic. The page refreshes in place without a transition.
    pub fn refresh_items(&mut self) {
        let Some(menu) = &self.current_menu else {
            return;
        };
        self.current_items = menu.items();
        let pages = self.pages();
        if self.page_index >= pages {
            self.page_index = pages.saturating_sub(1);
        }
        self.switch(TransitionKind::Instant, Duration::ZERO, None);
    }

    // =========================================================================
    // Applications
    // =========================================================================

    /// Park the current screen and bring `application` up full-screen.
    pub fn open_application(&mut self, application: Box<dyn Application>) -> ApplicationId {
        self.push();
        let id = ApplicationId::new(self.next_application_id);
        self.next_application_id += 1;
        debug!("opening application {id:?}");
        self.set_current_application(id, application);
        self.switch(TransitionKind::Swap, APP_TRANSITION_DURATION, None);
        id
    }

    /// Close an application wherever it lives: the one on screen goes back
    /// to its opener, a parked one is quietly removed from the stack.
    pub fn close_application(&mut self, id: ApplicationId) {
        if self
            .current_application
            .as_ref()
            .is_some_and(|(current, _)| *current == id)
        {
            debug!("closing application {id:?}");
            self.pop();
            return;
        }
        let parked = self.stack.len();
        self.stack.retain(|frame| frame.application_id() != Some(id));
        if self.stack.len() < parked {
            debug!("removed parked application {id:?}");
        }
    }

    // =========================================================================
    // Frame Driving
    // =========================================================================

    /// Advance animations by `dt` and poll open applications for self-close
    /// requests.
    pub fn tick(&mut self, dt: Duration) {
        let self_closed = self
            .current_application
            .as_ref()
            .filter(|(_, application)| application.is_closed())
            .map(|(id, _)| *id);
        if let Some(id) = self_closed {
            debug!("application {id:?} closed itself");
            self.close_application(id);
        }
        let closed_parked: Vec<ApplicationId> = self
            .stack
            .iter()
            .filter_map(|frame| match frame {
                StackFrame::Application { id, application } if application.is_closed() => {
                    Some(*id)
                }
                _ => None,
            })
            .collect();
        for id in closed_parked {
            self.close_application(id);
        }
        self.transitioner.tick(dt, self.fps.as_mut());
    }

    /// Draw the widget into `area` of the frame.
    pub fn draw(&self, frame: &mut FrameBuffer, area: Rectangle) {
        render::draw_menu_widget(self, frame, area);
    }

    // =========================================================================
    // Internals
    // =========================================================================

    pub(crate) fn transition_view(&self) -> TransitionView<'_> {
        self.transitioner.view()
    }

    /// Look an application up by id, on screen or parked on the stack.
    pub(crate) fn application_by_id(&self, id: ApplicationId) -> Option<&dyn Application> {
        if let Some((current, application)) = &self.current_application {
            if *current == id {
                return Some(application.as_ref());
            }
        }
        self.stack.iter().find_map(|frame| match frame {
            StackFrame::Application {
                id: parked,
                application,
            } if *parked == id => Some(application.as_ref()),
            _ => None,
        })
    }

    /// Build the screen snapshot for the widget's current state.
    fn build_screen(&self) -> ScreenSnapshot {
        if let Some((id, _)) = &self.current_application {
            return ScreenSnapshot::Application(*id);
        }
        let Some(menu) = &self.current_menu else {
            return ScreenSnapshot::Blank;
        };
        ScreenSnapshot::Page(build_page(menu, &self.current_items, self.page_index))
    }

    fn switch(
        &mut self,
        kind: TransitionKind,
        duration: Duration,
        departing: Option<Box<dyn Application>>,
    ) {
        let incoming = self.build_screen();
        self.transitioner
            .request(incoming, kind, duration, departing, self.fps.as_mut());
    }

    fn set_current_menu(&mut self, menu: Menu) {
        self.current_items = menu.items();
        self.current_menu = Some(menu);
        self.current_application = None;
        let pages = self.pages();
        if self.page_index >= pages {
            self.page_index = pages.saturating_sub(1);
        }
    }

    fn set_current_application(&mut self, id: ApplicationId, application: Box<dyn Application>) {
        self.current_application = Some((id, application));
        self.current_menu = None;
        self.current_items.clear();
        self.page_index = 0;
    }

    fn take_current_application(&mut self) -> Option<Box<dyn Application>> {
        self.current_application.take().map(|(_, application)| application)
    }

    /// Park the current screen on the stack and reset to page zero.
    fn push(&mut self) {
        if let Some(menu) = self.current_menu.take() {
            self.stack.push(StackFrame::Menu {
                menu,
                page_index: self.page_index,
            });
        } else if let Some((id, application)) = self.current_application.take() {
            self.stack.push(StackFrame::Application { id, application });
        }
        self.page_index = 0;
    }

    /// Pop one stack frame and switch back to it. A no-op at the root.
    fn pop(&mut self) {
        let Some(target) = self.stack.pop() else {
            return;
        };
        let departing = self.take_current_application();
        self.restore_frame(target, departing);
    }

    fn restore_frame(
        &mut self,
        frame: StackFrame,
        departing: Option<Box<dyn Application>>,
    ) {
        match frame {
            StackFrame::Menu { menu, page_index } => {
                let kind = if departing.is_some() {
                    TransitionKind::Swap
                } else {
                    TransitionKind::Slide(Direction::Right)
                };
                self.set_current_menu(menu);
                // Items may have changed while the menu was parked, so the
                // restored page is clamped to what still exists.
                self.page_index = page_index.min(self.pages().saturating_sub(1));
                self.switch(kind, TRANSITION_DURATION, departing);
            }
            StackFrame::Application { id, application } => {
                debug!("resuming application {id:?}");
                self.set_current_application(id, application);
                self.switch(TransitionKind::Swap, TRANSITION_DURATION, departing);
            }
        }
    }

    fn open_menu(&mut self, menu: Menu) {
        self.push();
        self.set_current_menu(menu);
        self.switch(
            TransitionKind::Slide(Direction::Left),
            TRANSITION_DURATION,
            None,
        );
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    // -------------------------------------------------------------------------
    // Test Fixtures
    // -------------------------------------------------------------------------

    fn leaf(label: &str) -> Item {
        Item::action(label, || ActionResult::Nothing)
    }

    fn leaves(n: usize) -> Vec<Item> {
        (0..n).map(|i| leaf(&format!("item {i}"))).collect()
    }

    fn widget_with(root: Menu) -> MenuWidget {
        let mut widget = MenuWidget::new();
        widget.set_root_menu(root);
        widget
    }

    /// Run the clock until all pending transitions have played out.
    fn settle(widget: &mut MenuWidget) {
        for _ in 0..32 {
            if !widget.is_transitioning() {
                return;
            }
            widget.tick(Duration::from_secs(1));
        }
        panic!("transitions never settled");
    }

    /// Labels on the page currently shown, headed or not.
    fn shown_labels(widget: &MenuWidget) -> Vec<String> {
        match widget.transitioner.current_screen() {
            ScreenSnapshot::Page(page) => {
                page.items().iter().map(|item| item.label.clone()).collect()
            }
            _ => panic!("expected a menu page on screen"),
        }
    }

    fn shown_heading(widget: &MenuWidget) -> Option<String> {
        match widget.transitioner.current_screen() {
            ScreenSnapshot::Page(page) => page.heading().map(|h| h.heading.clone()),
            _ => panic!("expected a menu page on screen"),
        }
    }

    #[derive(Clone, Default)]
    struct AppProbe {
        ups: Rc<Cell<u32>>,
        downs: Rc<Cell<u32>>,
        closed: Rc<Cell<bool>>,
    }

    struct TestApp {
        title: Option<String>,
        handles_back: bool,
        item: Option<Item>,
        probe: AppProbe,
    }

    impl TestApp {
        fn new(title: &str) -> Self {
            Self {
                title: Some(title.to_owned()),
                handles_back: false,
                item: None,
                probe: AppProbe::default(),
            }
        }

        fn untitled() -> Self {
            Self {
                title: None,
                handles_back: false,
                item: None,
                probe: AppProbe::default(),
            }
        }

        fn probed(probe: &AppProbe) -> Self {
            Self {
                title: Some("probed".to_owned()),
                handles_back: false,
                item: None,
                probe: probe.clone(),
            }
        }
    }

    impl Application for TestApp {
        fn title(&self) -> Option<&str> {
            self.title.as_deref()
        }

        fn draw(&self, _frame: &mut FrameBuffer, _area: Rectangle, _fade: u8) {}

        fn go_up(&mut self) {
            self.probe.ups.set(self.probe.ups.get() + 1);
        }

        fn go_down(&mut self) {
            self.probe.downs.set(self.probe.downs.get() + 1);
        }

        fn go_back(&mut self) -> bool {
            self.handles_back
        }

        fn item(&self, slot: usize) -> Option<Item> {
            if slot == 0 { self.item.clone() } else { None }
        }

        fn is_closed(&self) -> bool {
            self.probe.closed.get()
        }
    }

    // -------------------------------------------------------------------------
    // Root Menu Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_fresh_widget_is_blank() {
        let widget = MenuWidget::new();
        assert_eq!(widget.depth(), 0);
        assert_eq!(widget.pages(), 0);
        assert_eq!(widget.title(), None);
        assert!(!widget.is_scrollbar_visible());
        assert!(matches!(
            widget.transitioner.current_screen(),
            ScreenSnapshot::Blank
        ));
    }

    #[test]
    fn test_set_root_menu_shows_first_page_instantly() {
        let widget = widget_with(Menu::headless("Home", leaves(4)));
        assert!(!widget.is_transitioning(), "root appears without animation");
        assert_eq!(widget.title(), Some("Home".to_owned()));
        assert_eq!(widget.pages(), 2);
        assert_eq!(widget.page_index(), 0);
        assert_eq!(shown_labels(&widget), ["item 0", "item 1", "item 2"]);
    }

    #[test]
    fn test_set_root_menu_resets_navigation() {
        let mut widget = widget_with(Menu::headless("Home", leaves(7)));
        widget.go_down();
        widget.go_down();
        settle(&mut widget);
        assert_eq!(widget.page_index(), 2);

        widget.set_root_menu(Menu::headless("Other", leaves(9)));
        settle(&mut widget);
        assert_eq!(widget.depth(), 0);
        assert_eq!(widget.page_index(), 0, "a new root starts on its first page");
        assert_eq!(widget.title(), Some("Other".to_owned()));
    }

    #[test]
    fn test_set_root_menu_drops_an_open_application() {
        let mut widget = widget_with(Menu::headless("Home", leaves(1)));
        widget.open_application(Box::new(TestApp::new("App")));
        settle(&mut widget);

        widget.set_root_menu(Menu::headless("Home", leaves(1)));
        settle(&mut widget);
        assert_eq!(widget.current_application(), None);
        assert_eq!(widget.depth(), 0);
        assert_eq!(widget.title(), Some("Home".to_owned()));
    }

    // -------------------------------------------------------------------------
    // Paging Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_go_down_pages_forward_and_wraps() {
        let mut widget = widget_with(Menu::headless("Home", leaves(7)));
        assert_eq!(widget.pages(), 3);

        widget.go_down();
        settle(&mut widget);
        assert_eq!(widget.page_index(), 1);
        assert_eq!(shown_labels(&widget), ["item 3", "item 4", "item 5"]);

        widget.go_down();
        settle(&mut widget);
        assert_eq!(shown_labels(&widget), ["item 6"]);

        widget.go_down();
        settle(&mut widget);
        assert_eq!(widget.page_index(), 0, "paging past the end wraps around");
    }

    #[test]
    fn test_go_up_wraps_to_last_page() {
        let mut widget = widget_with(Menu::headless("Home", leaves(7)));
        widget.go_up();
        settle(&mut widget);
        assert_eq!(widget.page_index(), 2);

        widget.go_up();
        settle(&mut widget);
        assert_eq!(widget.page_index(), 1);
    }

    #[test]
    fn test_single_page_menu_does_not_page() {
        let mut widget = widget_with(Menu::headless("Home", leaves(3)));
        widget.go_down();
        assert_eq!(widget.page_index(), 0);
        assert!(!widget.is_transitioning(), "nothing to page to");

        widget.go_up();
        assert_eq!(widget.page_index(), 0);
        assert!(!widget.is_transitioning());
    }

    #[test]
    fn test_headed_menu_first_page_holds_heading_and_one_item() {
        let mut widget = widget_with(Menu::headed(
            "Main",
            "What next?",
            "Choose below",
            leaves(4),
        ));
        assert_eq!(widget.pages(), 2);
        assert_eq!(shown_heading(&widget), Some("What next?".to_owned()));
        assert_eq!(shown_labels(&widget), ["item 0"]);

        widget.go_down();
        settle(&mut widget);
        assert_eq!(shown_heading(&widget), None);
        assert_eq!(shown_labels(&widget), ["item 1", "item 2", "item 3"]);
    }

    #[test]
    fn test_scrollbar_visibility_follows_page_count() {
        let mut widget = widget_with(Menu::headless("Home", leaves(3)));
        assert!(!widget.is_scrollbar_visible(), "one page needs no scrollbar");

        widget.set_root_menu(Menu::headless("Home", leaves(4)));
        assert!(widget.is_scrollbar_visible());

        widget.open_application(Box::new(TestApp::new("App")));
        assert!(!widget.is_scrollbar_visible(), "applications cover the scrollbar");
    }

    // -------------------------------------------------------------------------
    // Selection Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_select_runs_an_action() {
        let fired = Rc::new(Cell::new(0));
        let seen = Rc::clone(&fired);
        let menu = Menu::headless(
            "Home",
            vec![Item::action("Fire", move || {
                seen.set(seen.get() + 1);
                ActionResult::Nothing
            })],
        );
        let mut widget = widget_with(menu);
        widget.select(0);
        assert_eq!(fired.get(), 1);
        assert_eq!(widget.depth(), 0, "a plain action does not navigate");
        assert!(!widget.is_transitioning());
    }

    #[test]
    fn test_select_descends_into_sub_menu() {
        let child = Menu::headless("Child", leaves(2));
        let mut widget = widget_with(Menu::headless(
            "Home",
            vec![Item::sub_menu("Settings", child)],
        ));
        widget.select(0);
        settle(&mut widget);

        assert_eq!(widget.depth(), 1);
        assert_eq!(widget.title(), Some("Child".to_owned()));
        assert_eq!(shown_labels(&widget), ["item 0", "item 1"]);
    }

    #[test]
    fn test_select_opens_menu_returned_by_action() {
        let mut widget = widget_with(Menu::headless(
            "Home",
            vec![Item::action("Notifications", || {
                ActionResult::Menu(Menu::headless("Notifications", leaves(1)))
            })],
        ));
        widget.select(0);
        settle(&mut widget);
        assert_eq!(widget.depth(), 1);
        assert_eq!(widget.title(), Some("Notifications".to_owned()));
    }

    #[test]
    fn test_select_empty_slot_is_ignored() {
        let mut widget = widget_with(Menu::headless("Home", leaves(2)));
        widget.select(2);
        assert_eq!(widget.depth(), 0);
        assert!(!widget.is_transitioning());
    }

    #[test]
    fn test_select_without_a_screen_is_ignored() {
        let mut widget = MenuWidget::new();
        widget.select(0);
        assert_eq!(widget.depth(), 0);
    }

    #[test]
    fn test_headed_page_selects_through_the_bottom_slot() {
        let child = Menu::headless("Child", leaves(1));
        let mut widget = widget_with(Menu::headed(
            "Main",
            "What next?",
            "Choose below",
            vec![Item::sub_menu("Settings", child)],
        ));
        widget.select(0);
        widget.select(1);
        assert_eq!(widget.depth(), 0, "heading slots hold no items");

        widget.select(2);
        settle(&mut widget);
        assert_eq!(widget.depth(), 1);
        assert_eq!(widget.title(), Some("Child".to_owned()));
    }

    // -------------------------------------------------------------------------
    // Stack Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_go_back_restores_the_parked_page() {
        let child = Menu::headless("Child", leaves(1));
        let mut items = leaves(6);
        items.push(Item::sub_menu("Settings", child));
        let mut widget = widget_with(Menu::headless("Home", items));

        widget.go_down();
        widget.go_down();
        settle(&mut widget);
        assert_eq!(widget.page_index(), 2);
        widget.select(0);
        settle(&mut widget);
        assert_eq!(widget.depth(), 1);
        assert_eq!(widget.page_index(), 0, "a child menu starts on its first page");

        widget.go_back();
        settle(&mut widget);
        assert_eq!(widget.depth(), 0);
        assert_eq!(widget.page_index(), 2, "the parked page comes back");
        assert_eq!(widget.title(), Some("Home".to_owned()));
    }

    #[test]
    fn test_go_back_at_the_root_is_ignored() {
        let mut widget = widget_with(Menu::headless("Home", leaves(2)));
        widget.go_back();
        assert_eq!(widget.depth(), 0);
        assert!(!widget.is_transitioning());
    }

    #[test]
    fn test_restored_page_is_clamped_when_items_shrank() {
        let count = Rc::new(Cell::new(7usize));
        let source = Rc::clone(&count);
        let root = Menu::headless(
            "Home",
            types::ItemsSource::lazy(move || {
                let mut items: Vec<Item> = (0..source.get())
                    .map(|i| Item::action(format!("item {i}"), || ActionResult::Nothing))
                    .collect();
                items.push(Item::sub_menu(
                    "Settings",
                    Menu::headless("Child", Vec::new()),
                ));
                items
            }),
        );
        let mut widget = widget_with(root);
        assert_eq!(widget.pages(), 3);

        widget.go_down();
        widget.go_down();
        settle(&mut widget);
        widget.select(1);
        settle(&mut widget);
        assert_eq!(widget.depth(), 1);

        // The menu shrinks while parked; popping back must not land past
        // the last page that still exists.
        count.set(1);
        widget.go_back();
        settle(&mut widget);
        assert_eq!(widget.pages(), 1);
        assert_eq!(widget.page_index(), 0);
    }

    #[test]
    fn test_refresh_items_requeries_a_dynamic_source() {
        let count = Rc::new(Cell::new(2usize));
        let source = Rc::clone(&count);
        let root = Menu::headless(
            "Home",
            types::ItemsSource::lazy(move || {
                (0..source.get())
                    .map(|i| Item::action(format!("item {i}"), || ActionResult::Nothing))
                    .collect()
            }),
        );
        let mut widget = widget_with(root);
        assert_eq!(widget.pages(), 1);

        count.set(5);
        widget.refresh_items();
        assert_eq!(widget.pages(), 2, "refresh picks up the new items");
        assert!(!widget.is_transitioning(), "refresh swaps the page in place");
    }

    #[test]
    fn test_go_home_unwinds_nested_menus() {
        let grandchild = Menu::headless("Grandchild", leaves(1));
        let child = Menu::headless("Child", vec![Item::sub_menu("Deeper", grandchild)]);
        let mut widget = widget_with(Menu::headless(
            "Home",
            vec![Item::sub_menu("Child", child)],
        ));
        widget.select(0);
        settle(&mut widget);
        widget.select(0);
        settle(&mut widget);
        assert_eq!(widget.depth(), 2);

        widget.go_home();
        settle(&mut widget);
        assert_eq!(widget.depth(), 0);
        assert_eq!(widget.title(), Some("Home".to_owned()));
    }

    #[test]
    fn test_go_home_at_the_root_is_ignored() {
        let mut widget = widget_with(Menu::headless("Home", leaves(2)));
        widget.go_home();
        assert!(!widget.is_transitioning());
        assert_eq!(widget.title(), Some("Home".to_owned()));
    }

    // -------------------------------------------------------------------------
    // Application Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_open_application_takes_over_the_screen() {
        let mut widget = widget_with(Menu::headless("Home", leaves(4)));
        let id = widget.open_application(Box::new(TestApp::new("Timer")));
        settle(&mut widget);

        assert_eq!(widget.current_application(), Some(id));
        assert_eq!(widget.depth(), 1, "the menu is parked underneath");
        assert_eq!(widget.title(), Some("Timer".to_owned()));
        assert_eq!(widget.pages(), 0);
        assert!(matches!(
            widget.transitioner.current_screen(),
            ScreenSnapshot::Application(shown) if *shown == id
        ));
    }

    #[test]
    fn test_untitled_application_hides_the_menu_title() {
        let mut widget = widget_with(Menu::headless("Home", leaves(1)));
        widget.open_application(Box::new(TestApp::untitled()));
        settle(&mut widget);
        assert_eq!(widget.title(), None, "the parked menu's title must not leak");
    }

    #[test]
    fn test_paging_is_forwarded_to_the_open_application() {
        let probe = AppProbe::default();
        let mut widget = widget_with(Menu::headless("Home", leaves(7)));
        widget.open_application(Box::new(TestApp::probed(&probe)));
        settle(&mut widget);

        widget.go_down();
        widget.go_down();
        widget.go_up();
        assert_eq!(probe.downs.get(), 2);
        assert_eq!(probe.ups.get(), 1);
        assert_eq!(widget.page_index(), 0, "the widget's own paging stays put");
    }

    #[test]
    fn test_select_is_forwarded_to_the_open_application() {
        let fired = Rc::new(Cell::new(0));
        let seen = Rc::clone(&fired);
        let mut app = TestApp::new("App");
        app.item = Some(Item::action("Dismiss", move || {
            seen.set(seen.get() + 1);
            ActionResult::Nothing
        }));
        let mut widget = widget_with(Menu::headless("Home", leaves(1)));
        widget.open_application(Box::new(app));
        settle(&mut widget);

        widget.select(0);
        assert_eq!(fired.get(), 1);
        widget.select(1);
        assert_eq!(fired.get(), 1, "the application exposes no item in slot 1");
    }

    #[test]
    fn test_go_back_closes_the_application() {
        let mut widget = widget_with(Menu::headless("Home", leaves(4)));
        widget.go_down();
        settle(&mut widget);
        widget.open_application(Box::new(TestApp::new("Timer")));
        settle(&mut widget);

        widget.go_back();
        settle(&mut widget);
        assert_eq!(widget.current_application(), None);
        assert_eq!(widget.depth(), 0);
        assert_eq!(widget.page_index(), 1, "the menu resumes where it was");
    }

    #[test]
    fn test_application_can_swallow_go_back() {
        let mut app = TestApp::new("App");
        app.handles_back = true;
        let mut widget = widget_with(Menu::headless("Home", leaves(1)));
        let id = widget.open_application(Box::new(app));
        settle(&mut widget);

        widget.go_back();
        assert_eq!(
            widget.current_application(),
            Some(id),
            "the application handled the event itself"
        );
    }

    #[test]
    fn test_close_application_by_id() {
        let mut widget = widget_with(Menu::headless("Home", leaves(1)));
        let id = widget.open_application(Box::new(TestApp::new("Timer")));
        settle(&mut widget);

        widget.close_application(id);
        settle(&mut widget);
        assert_eq!(widget.current_application(), None);
        assert_eq!(widget.depth(), 0);
    }

    #[test]
    fn test_application_self_close_is_polled() {
        let probe = AppProbe::default();
        let mut widget = widget_with(Menu::headless("Home", leaves(1)));
        widget.open_application(Box::new(TestApp::probed(&probe)));
        settle(&mut widget);

        probe.closed.set(true);
        widget.tick(Duration::from_millis(20));
        settle(&mut widget);
        assert_eq!(widget.current_application(), None);
        assert_eq!(widget.depth(), 0);
    }

    #[test]
    fn test_second_application_parks_the_first() {
        let mut widget = widget_with(Menu::headless("Home", leaves(1)));
        let first = widget.open_application(Box::new(TestApp::new("First")));
        settle(&mut widget);
        let second = widget.open_application(Box::new(TestApp::new("Second")));
        settle(&mut widget);

        assert_eq!(widget.current_application(), Some(second));
        assert_eq!(widget.depth(), 2);

        widget.go_back();
        settle(&mut widget);
        assert_eq!(widget.current_application(), Some(first));
        assert_eq!(widget.title(), Some("First".to_owned()));
    }

    #[test]
    fn test_closing_a_parked_application_leaves_the_screen_alone() {
        let mut widget = widget_with(Menu::headless("Home", leaves(1)));
        let first = widget.open_application(Box::new(TestApp::new("First")));
        settle(&mut widget);
        let second = widget.open_application(Box::new(TestApp::new("Second")));
        settle(&mut widget);

        widget.close_application(first);
        assert_eq!(widget.current_application(), Some(second));
        assert_eq!(widget.depth(), 1, "only the parked frame disappeared");
        assert!(!widget.is_transitioning(), "no visible navigation happened");

        widget.go_back();
        settle(&mut widget);
        assert_eq!(widget.current_application(), None);
        assert_eq!(widget.title(), Some("Home".to_owned()));
    }

    #[test]
    fn test_go_home_drops_parked_applications() {
        let mut widget = widget_with(Menu::headless("Home", leaves(1)));
        widget.open_application(Box::new(TestApp::new("First")));
        settle(&mut widget);
        widget.open_application(Box::new(TestApp::new("Second")));
        settle(&mut widget);
        assert_eq!(widget.depth(), 2);

        widget.go_home();
        settle(&mut widget);
        assert_eq!(widget.depth(), 0);
        assert_eq!(widget.current_application(), None);
        assert_eq!(widget.title(), Some("Home".to_owned()));
    }
}
