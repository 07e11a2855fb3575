#![forbid(unsafe_code)]

//! Mobile products accordion.
//!
//! The products section of the mobile menu expands into category rows of
//! which at most one is open at a time. Toggling a category while the
//! products section is closed is a no-op: category rows are only reachable
//! through an open section, so a stray gesture is ignored rather than
//! mutating invisible state.
//!
//! # Invariants
//!
//! 1. At most one category row is open.
//! 2. An open row implies the products section is open.
//! 3. An open row index is always in range for the catalog.

use tracing::trace;

/// State of the mobile products accordion.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    products_open: bool,
    open_category: Option<usize>,
    category_count: usize,
}

impl Accordion {
    /// Create an accordion over `category_count` rows, fully collapsed.
    #[must_use]
    pub fn new(category_count: usize) -> Self {
        Self {
            products_open: false,
            open_category: None,
            category_count,
        }
    }

    /// Whether the products section is expanded.
    #[must_use]
    pub fn products_open(&self) -> bool {
        self.products_open
    }

    /// The currently open category row, if any.
    #[must_use]
    pub fn open_category(&self) -> Option<usize> {
        self.open_category
    }

    /// Flip the products section. Closing it also closes the open row.
    pub fn toggle_products(&mut self) {
        self.products_open = !self.products_open;
        if !self.products_open {
            self.open_category = None;
        }
        trace!(open = self.products_open, "products section toggled");
    }

    /// Toggle one category row.
    ///
    /// Self-inverse per index; opening a row closes any other open row.
    /// Ignored while the products section is closed or when `index` is out
    /// of range.
    pub fn toggle_category(&mut self, index: usize) {
        if !self.products_open {
            trace!(index, "category toggle ignored: products section closed");
            return;
        }
        if index >= self.category_count {
            trace!(
                index,
                count = self.category_count,
                "category toggle ignored: index out of range"
            );
            return;
        }
        self.open_category = if self.open_category == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Collapse everything (invoked whenever the mobile menu closes).
    pub fn reset(&mut self) {
        self.products_open = false;
        self.open_category = None;
    }
}
