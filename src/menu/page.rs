//! Menu pages and pagination arithmetic.
//!
//! Items are chunked into pages of [`PAGE_SIZE`]. A headed menu spends the
//! top two slots of its first page on the heading pair, leaving room for one
//! item there; later pages of a headed menu therefore start two items early
//! relative to a headless menu:
//!
//! ```text
//! headless: page p shows items[3p .. 3p + 3],   pages = ceil(n / 3)
//! headed:   page 0 shows items[0 .. 1] + heading
//!           page p shows items[3p - 2 .. 3p + 1], pages = ceil((n + 2) / 3)
//! ```

use log::warn;

use crate::config::PAGE_SIZE;
use crate::error::MenuError;
use crate::menu::types::{Item, Menu};

// =============================================================================
// Pagination Arithmetic
// =============================================================================

/// Number of pages a menu with `item_count` items paginates into.
pub fn page_count(item_count: usize, headed: bool) -> usize {
    if headed {
        (item_count + PAGE_SIZE - 1).div_ceil(PAGE_SIZE)
    } else {
        item_count.div_ceil(PAGE_SIZE)
    }
}

/// Slice of `items` shown on `page_index`. Out-of-range pages are empty.
pub fn page_slice(items: &[Item], page_index: usize, headed: bool) -> &[Item] {
    if headed {
        if page_index == 0 {
            return &items[..items.len().min(1)];
        }
        let start = page_index * PAGE_SIZE - (PAGE_SIZE - 1);
        if start >= items.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(items.len());
        &items[start..end]
    } else {
        let start = page_index * PAGE_SIZE;
        if start >= items.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(items.len());
        &items[start..end]
    }
}

// =============================================================================
// Page Snapshot
// =============================================================================

/// Heading pair shown on the first page of a headed menu.
#[derive(Clone)]
pub struct PageHeading {
    pub heading: String,
    pub sub_heading: String,
}

/// One rendered menu page: an optional heading pair plus the items whose
/// select keys are live on this page.
#[derive(Clone)]
pub struct MenuPage {
    heading: Option<PageHeading>,
    items: Vec<Item>,
}

// Items hold closures, so `Debug` cannot be derived.
impl std::fmt::Debug for MenuPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuPage")
            .field(
                "heading",
                &self.heading.as_ref().map(|h| (&h.heading, &h.sub_heading)),
            )
            .field(
                "items",
                &self.items.iter().map(|item| &item.label).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl MenuPage {
    /// Page without a heading. At most [`PAGE_SIZE`] items fit.
    pub fn new(items: Vec<Item>) -> Result<Self, MenuError> {
        if items.len() > PAGE_SIZE {
            return Err(MenuError::TooManyItems { count: items.len() });
        }
        Ok(Self { heading: None, items })
    }

    /// First page of a headed menu. The heading pair occupies two slots, so
    /// at most one item fits.
    pub fn headed(
        heading: impl Into<String>,
        sub_heading: impl Into<String>,
        items: Vec<Item>,
    ) -> Result<Self, MenuError> {
        if items.len() > 1 {
            return Err(MenuError::TooManyHeaderItems { count: items.len() });
        }
        Ok(Self {
            heading: Some(PageHeading {
                heading: heading.into(),
                sub_heading: sub_heading.into(),
            }),
            items,
        })
    }

    /// Page with nothing on it.
    pub const fn empty() -> Self {
        Self {
            heading: None,
            items: Vec::new(),
        }
    }

    pub fn heading(&self) -> Option<&PageHeading> {
        self.heading.as_ref()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item behind the select key of `slot`, if that slot holds one.
    ///
    /// On a headed page only the bottom slot answers; everything else warns
    /// and returns `None`, as does an out-of-range slot on a normal page.
    pub fn item(&self, slot: usize) -> Option<&Item> {
        if self.heading.is_some() {
            if slot != PAGE_SIZE - 1 {
                warn!("headed page item sits in slot {}, got {slot}", PAGE_SIZE - 1);
                return None;
            }
            return self.items.first();
        }
        if slot >= self.items.len() {
            warn!(
                "slot {slot} is out of range for a page with {} items",
                self.items.len()
            );
            return None;
        }
        self.items.get(slot)
    }
}

/// Build the page snapshot for `page_index` of `menu`, with `items` already
/// resolved. The slices above never overflow a page, so the error arm only
/// guards against future mistakes.
pub fn build_page(menu: &Menu, items: &[Item], page_index: usize) -> MenuPage {
    let result = if menu.is_headed() && page_index == 0 {
        MenuPage::headed(
            menu.heading().unwrap_or_default(),
            menu.sub_heading().unwrap_or_default(),
            page_slice(items, 0, true).to_vec(),
        )
    } else {
        MenuPage::new(page_slice(items, page_index, menu.is_headed()).to_vec())
    };
    match result {
        Ok(page) => page,
        Err(err) => {
            warn!("dropping malformed page {page_index}: {err}");
            MenuPage::empty()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
