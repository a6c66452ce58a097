//! Sliding-window pagination state for the catalog list.
//!
//! The window holds at most ~30 items of the remote collection. Fetching
//! forward keeps the first [`FORWARD_KEEP`] items and appends the new page;
//! fetching backward drops the first [`BACKWARD_DROP`] items and prepends
//! it. The `skip` cursor tracks the forward edge of the window within the
//! remote collection and only moves on successful fetches.

use tracing::warn;

use crate::api::Product;
use crate::config::ITEMS_PER_PAGE;
use crate::error::Result;

/// Direction of a paginated fetch relative to the current window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDirection {
    /// Extend the window toward higher offsets
    Next,
    /// Extend the window toward offset zero
    Prev,
}

/// Leading items kept when the window is extended forward.
///
/// Fixed at 20, independent of the page size.
const FORWARD_KEEP: usize = 20;

/// Leading items dropped when the window is extended backward.
const BACKWARD_DROP: usize = 10;

/// Windowed view over the remote catalog.
#[derive(Debug, Clone)]
pub struct ProductWindow {
    /// In-memory items, insertion-order = fetch order
    items: Vec<Product>,
    /// Offset of the forward edge of the window in the remote collection
    skip: usize,
    /// Reentrancy guard: true while a directional fetch is outstanding
    loading: bool,
    /// Whether the remote has more data past the forward edge
    has_more: bool,
    /// Whether the remote has more data before the backward edge
    has_more_prev: bool,
}

impl Default for ProductWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductWindow {
    /// Create an empty window at offset zero.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            skip: 0,
            loading: false,
            has_more: true,
            has_more_prev: false,
        }
    }

    /// The items currently held for display.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the window holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The forward edge of the window within the remote collection.
    pub fn skip(&self) -> usize {
        self.skip
    }

    /// Whether a directional fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the remote may have more data in the given direction.
    pub fn has_more(&self, direction: FetchDirection) -> bool {
        match direction {
            FetchDirection::Next => self.has_more,
            FetchDirection::Prev => self.has_more_prev,
        }
    }

    /// Validate a directional fetch and compute its offset.
    ///
    /// Returns `None` while a fetch is outstanding or once the direction
    /// is exhausted; the caller must not issue a request in that case.
    /// On acceptance the loading guard is set and the caller is expected
    /// to dispatch exactly one page fetch at the returned offset, then
    /// report back through [`ProductWindow::finish`].
    pub fn request(&mut self, direction: FetchDirection) -> Option<usize> {
        if self.loading {
            return None;
        }

        let offset = match direction {
            FetchDirection::Next if self.has_more => self.skip + ITEMS_PER_PAGE,
            FetchDirection::Prev if self.has_more_prev => self.skip.saturating_sub(ITEMS_PER_PAGE),
            _ => return None,
        };

        self.loading = true;
        Some(offset)
    }

    /// Replace the window with the initial load.
    ///
    /// The cursor lands on `ITEMS_PER_PAGE` even when the remote returned
    /// fewer than the requested three pages; exhaustion is then discovered
    /// by the first forward fetch coming back empty. Does not touch the
    /// loading guard, which the initial load bypasses.
    pub fn replace_initial(&mut self, products: Vec<Product>) {
        self.items = products;
        self.skip = ITEMS_PER_PAGE;
    }

    /// Fold a directional fetch completion into the window.
    ///
    /// Clears the loading guard first, on every path, so a failed fetch
    /// can never leave the window stuck loading.
    pub fn finish(&mut self, direction: FetchDirection, offset: usize, result: Result<Vec<Product>>) {
        self.loading = false;

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                warn!(err = %e, ?direction, offset, "catalog page fetch failed");
                return;
            },
        };

        if page.is_empty() {
            match direction {
                FetchDirection::Next => self.has_more = false,
                FetchDirection::Prev => self.has_more_prev = false,
            }
            return;
        }

        match direction {
            FetchDirection::Next => {
                self.items.truncate(FORWARD_KEEP);
                self.items.extend(page);
            },
            FetchDirection::Prev => {
                let kept = self.items.split_off(BACKWARD_DROP.min(self.items.len()));
                self.items = page;
                self.items.extend(kept);
            },
        }

        self.skip = offset;
        self.has_more_prev = offset > 0;
    }
}

// Include tests module
#[path = "window_tests.rs"]
mod tests;
