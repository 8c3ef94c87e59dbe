//! Declarative menu tree types.
//!
//! A menu is data: a title, an optional heading pair, and an ordered list of
//! items. Titles and item lists may be closures re-queried on demand, which
//! is how lazily produced menus (notification lists, device scans) plug in.
//! Items carry their own styling so a tree can highlight entries without
//! touching the drawing code.

use std::sync::Arc;

use embedded_graphics::pixelcolor::Rgb565;

use crate::application::Application;
use crate::colors::{PRIMARY, WHITE};

// =============================================================================
// Lazy Sources
// =============================================================================

/// Menu title, fixed or re-queried on demand.
#[derive(Clone)]
pub enum TitleSource {
    Static(String),
    Dynamic(Arc<dyn Fn() -> String>),
}

impl TitleSource {
    /// Build a dynamic title from a closure.
    pub fn lazy(f: impl Fn() -> String + 'static) -> Self {
        Self::Dynamic(Arc::new(f))
    }

    /// Current title value.
    pub fn resolve(&self) -> String {
        match self {
            Self::Static(title) => title.clone(),
            Self::Dynamic(f) => f(),
        }
    }
}

impl From<&str> for TitleSource {
    fn from(title: &str) -> Self {
        Self::Static(title.to_owned())
    }
}

impl From<String> for TitleSource {
    fn from(title: String) -> Self {
        Self::Static(title)
    }
}

/// Menu items, fixed or re-queried on demand.
///
/// A `Dynamic` source is resolved whenever the menu becomes current and again
/// on [`MenuWidget::refresh_items`](crate::menu::MenuWidget::refresh_items).
#[derive(Clone)]
pub enum ItemsSource {
    Static(Vec<Item>),
    Dynamic(Arc<dyn Fn() -> Vec<Item>>),
}

impl ItemsSource {
    /// Build a dynamic item list from a closure.
    pub fn lazy(f: impl Fn() -> Vec<Item> + 'static) -> Self {
        Self::Dynamic(Arc::new(f))
    }

    /// Current item list.
    pub fn resolve(&self) -> Vec<Item> {
        match self {
            Self::Static(items) => items.clone(),
            Self::Dynamic(f) => f(),
        }
    }
}

impl From<Vec<Item>> for ItemsSource {
    fn from(items: Vec<Item>) -> Self {
        Self::Static(items)
    }
}

// =============================================================================
// Menus
// =============================================================================

/// A menu node. Headed menus spend the top two slots of their first page on
/// a heading and sub-heading; headless menus use all three slots for items.
#[derive(Clone)]
pub enum Menu {
    Headed(HeadedMenu),
    Headless(HeadlessMenu),
}

#[derive(Clone)]
pub struct HeadedMenu {
    pub title: TitleSource,
    pub heading: String,
    pub sub_heading: String,
    pub items: ItemsSource,
}

#[derive(Clone)]
pub struct HeadlessMenu {
    pub title: TitleSource,
    pub items: ItemsSource,
}

impl Menu {
    /// Build a headed menu.
    pub fn headed(
        title: impl Into<TitleSource>,
        heading: impl Into<String>,
        sub_heading: impl Into<String>,
        items: impl Into<ItemsSource>,
    ) -> Self {
        Self::Headed(HeadedMenu {
            title: title.into(),
            heading: heading.into(),
            sub_heading: sub_heading.into(),
            items: items.into(),
        })
    }

    /// Build a headless menu.
    pub fn headless(title: impl Into<TitleSource>, items: impl Into<ItemsSource>) -> Self {
        Self::Headless(HeadlessMenu {
            title: title.into(),
            items: items.into(),
        })
    }

    /// Current title.
    pub fn title(&self) -> String {
        match self {
            Self::Headed(menu) => menu.title.resolve(),
            Self::Headless(menu) => menu.title.resolve(),
        }
    }

    /// Current items, resolving a dynamic source.
    pub fn items(&self) -> Vec<Item> {
        match self {
            Self::Headed(menu) => menu.items.resolve(),
            Self::Headless(menu) => menu.items.resolve(),
        }
    }

    pub fn is_headed(&self) -> bool {
        matches!(self, Self::Headed(_))
    }

    pub fn heading(&self) -> Option<&str> {
        match self {
            Self::Headed(menu) => Some(&menu.heading),
            Self::Headless(_) => None,
        }
    }

    pub fn sub_heading(&self) -> Option<&str> {
        match self {
            Self::Headed(menu) => Some(&menu.sub_heading),
            Self::Headless(_) => None,
        }
    }
}

// =============================================================================
// Items
// =============================================================================

/// What an action callback asks the widget to do next.
pub enum ActionResult {
    /// Side effect only; stay where we are.
    Nothing,
    /// Push the returned menu as if it were a sub-menu of the current one.
    Menu(Menu),
    /// Open the returned application full-screen.
    Application(Box<dyn Application>),
}

/// Action callback. May be invoked any number of times.
pub type Action = Arc<dyn Fn() -> ActionResult>;

/// Factory producing a fresh application instance per launch.
pub type ApplicationLauncher = Arc<dyn Fn() -> Box<dyn Application>>;

/// A selectable menu entry.
#[derive(Clone)]
pub struct Item {
    pub label: String,
    /// Label and icon color.
    pub color: Rgb565,
    pub background_color: Rgb565,
    /// Short glyph drawn before the label (single character works best).
    pub icon: Option<String>,
    /// Compact button, rendered [`SHORT_WIDTH`](crate::config::SHORT_WIDTH)
    /// wide instead of filling the row.
    pub is_short: bool,
    pub kind: ItemKind,
}

#[derive(Clone)]
pub enum ItemKind {
    Action(Action),
    SubMenu(Menu),
    Application(ApplicationLauncher),
}

impl Item {
    fn base(label: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            label: label.into(),
            color: WHITE,
            background_color: PRIMARY,
            icon: None,
            is_short: false,
            kind,
        }
    }

    /// Entry running a callback when selected.
    pub fn action(label: impl Into<String>, action: impl Fn() -> ActionResult + 'static) -> Self {
        Self::base(label, ItemKind::Action(Arc::new(action)))
    }

    /// Entry descending into a child menu.
    pub fn sub_menu(label: impl Into<String>, menu: Menu) -> Self {
        Self::base(label, ItemKind::SubMenu(menu))
    }

    /// Entry launching an application.
    pub fn application(
        label: impl Into<String>,
        launcher: impl Fn() -> Box<dyn Application> + 'static,
    ) -> Self {
        Self::base(label, ItemKind::Application(Arc::new(launcher)))
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_color(mut self, color: Rgb565) -> Self {
        self.color = color;
        self
    }

    pub fn with_background(mut self, color: Rgb565) -> Self {
        self.background_color = color;
        self
    }

    pub fn short(mut self) -> Self {
        self.is_short = true;
        self
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

    use crate::colors::YELLOW;

    #[test]
    fn test_item_defaults() {
        let item = Item::action("Power", || ActionResult::Nothing);
        assert_eq!(item.label, "Power");
        assert_eq!(item.color, WHITE, "default label color is white");
        assert_eq!(item.background_color, PRIMARY, "default background is the accent");
        assert!(item.icon.is_none());
        assert!(!item.is_short);
    }

    #[test]
    fn test_item_builder_overrides() {
        let item = Item::action("Notifications", || ActionResult::Nothing)
            .with_icon("!")
            .with_color(YELLOW)
            .short();
        assert_eq!(item.icon.as_deref(), Some("!"));
        assert_eq!(item.color, YELLOW);
        assert!(item.is_short);
    }

    #[test]
    fn test_static_title_resolves() {
        let menu = Menu::headless("Dashboard", Vec::new());
        assert_eq!(menu.title(), "Dashboard");
    }

    #[test]
    fn test_dynamic_title_requeried_each_time() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = calls.clone();
        let menu = Menu::headless(
            TitleSource::lazy(move || {
                counter.set(counter.get() + 1);
                format!("Inbox ({})", counter.get())
            }),
            Vec::new(),
        );
        assert_eq!(menu.title(), "Inbox (1)");
        assert_eq!(menu.title(), "Inbox (2)", "dynamic titles resolve per query");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_dynamic_items_requeried_each_time() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = calls.clone();
        let menu = Menu::headless(
            "Notifications",
            ItemsSource::lazy(move || {
                counter.set(counter.get() + 1);
                Vec::new()
            }),
        );
        assert!(menu.items().is_empty());
        assert!(menu.items().is_empty());
        assert_eq!(calls.get(), 2, "dynamic items resolve per query");
    }

    #[test]
    fn test_headed_accessors() {
        let menu = Menu::headed("Main", "What next?", "Choose below", Vec::new());
        assert!(menu.is_headed());
        assert_eq!(menu.heading(), Some("What next?"));
        assert_eq!(menu.sub_heading(), Some("Choose below"));

        let flat = Menu::headless("Home", Vec::new());
        assert!(!flat.is_headed());
        assert_eq!(flat.heading(), None);
        assert_eq!(flat.sub_heading(), None);
    }

    #[test]
    fn test_menu_clone_shares_dynamic_source() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = calls.clone();
        let menu = Menu::headless(
            "Scans",
            ItemsSource::lazy(move || {
                counter.set(counter.get() + 1);
                vec![Item::action("Entry", || ActionResult::Nothing)]
            }),
        );
        let copy = menu.clone();
        let _ = menu.items();
        let _ = copy.items();
        assert_eq!(calls.get(), 2, "clones share the same closure");
    }
}
