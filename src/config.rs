//! Behavioral constants for the catalog browser.
//!
//! These are deliberately hard-coded rather than exposed through flags or
//! environment variables; the scroll geometry is kept in the virtual-pixel
//! domain so the threshold math in [`crate::scroll`] stays in one unit.

use std::time::Duration;

/// Page size for all paginated fetches.
pub const ITEMS_PER_PAGE: usize = 10;

/// Virtual pixel height of one list row.
pub const ITEM_HEIGHT: f64 = 50.0;

/// Virtual pixel height of the scrollable viewport.
pub const WINDOW_HEIGHT: f64 = 400.0;

/// Quiet interval for the trailing-edge scroll debounce.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(200);

/// Rows materialized outside the visible viewport on each side.
pub const OVERSCAN_COUNT: usize = 3;

/// Pages fetched by the initial load.
pub const INITIAL_PAGES: usize = 3;

/// Terminal rows spanned by the viewport (one row per `ITEM_HEIGHT`).
pub const VIEWPORT_ROWS: u16 = (WINDOW_HEIGHT / ITEM_HEIGHT) as u16;

/// How long the event loop waits for input before running a tick.
///
/// Kept well under `DEBOUNCE_INTERVAL` so trailing-edge fires are not
/// delayed noticeably past their deadline.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);
