//! Virtualized product list widget.
//!
//! Only rows inside the viewport, plus a fixed overscan margin, are
//! materialized as display lines; everything else in the window stays
//! untouched. Rows have a fixed height of one terminal line per
//! [`ITEM_HEIGHT`] virtual pixels, so the visible range is a plain
//! division of the scroll offset.

use std::ops::Range;

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};

use crate::api::Product;
use crate::config::{ITEM_HEIGHT, OVERSCAN_COUNT};
use crate::scroll::ScrollPosition;

/// Render state for the virtualized product list
#[derive(Debug, Clone, Default)]
pub struct ProductListState {
    /// Viewport scroll position in virtual pixels
    pub scroll: ScrollPosition,
}

impl ProductListState {
    /// Create a state scrolled to the top
    pub fn new() -> Self {
        Self {
            scroll: ScrollPosition::new(),
        }
    }

    /// Index of the first row inside the viewport
    pub fn first_visible(&self) -> usize {
        (self.scroll.offset() / ITEM_HEIGHT) as usize
    }

    /// Rows materialized for display: the viewport widened by the
    /// overscan margin on both sides, clamped to the item count
    pub fn visible_range(&self, item_count: usize, viewport_rows: usize) -> Range<usize> {
        let first = self.first_visible();
        let end = (first + viewport_rows + OVERSCAN_COUNT).min(item_count);
        let start = first.saturating_sub(OVERSCAN_COUNT).min(end);

        start..end
    }
}

/// Virtualized list of products with fixed-height rows
pub struct ProductList<'a> {
    /// The window of items to draw from
    items: &'a [Product],
    /// Block for styling the list
    block: Option<Block<'a>>,
    /// Style applied to every row
    style: Style,
    /// Whether to draw a scrollbar on the right edge
    show_scrollbar: bool,
}

impl<'a> ProductList<'a> {
    /// Create a list over the given items
    pub fn new(items: &'a [Product]) -> Self {
        Self {
            items,
            block: None,
            style: Style::default(),
            show_scrollbar: true,
        }
    }

    /// Set the block for the list
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Set the style for the rows
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set whether to draw the scrollbar
    pub fn show_scrollbar(mut self, show: bool) -> Self {
        self.show_scrollbar = show;
        self
    }

    /// Display text for one row
    fn row_text(product: &Product) -> String {
        format!("{} - ${}", product.title, product.price)
    }
}

impl StatefulWidget for ProductList<'_> {
    type State = ProductListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let list_area = match self.block {
            Some(b) => {
                let inner_area = b.inner(area);
                b.render(area, buf);
                inner_area
            },
            None => area,
        };

        if list_area.height < 1 || self.items.is_empty() {
            return;
        }

        let viewport_rows = list_area.height as usize;
        let first = state.first_visible();

        for index in state.visible_range(self.items.len(), viewport_rows) {
            // Overscan rows sit outside the viewport and are clipped here
            let Some(row) = index.checked_sub(first) else {
                continue;
            };
            if row >= viewport_rows {
                break;
            }

            let line = Line::styled(Self::row_text(&self.items[index]), self.style);
            let y = list_area.y + row as u16;
            buf.set_line(list_area.x, y, &line, list_area.width);
        }

        if self.show_scrollbar && self.items.len() > viewport_rows {
            let mut scrollbar_state =
                ScrollbarState::new(self.items.len() - viewport_rows).position(first);
            let scrollbar_area = area.inner(Margin {
                horizontal: 0,
                vertical: 1,
            });

            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                scrollbar_area,
                buf,
                &mut scrollbar_state,
            );
        }
    }
}

// Include tests module
#[path = "product_list_tests.rs"]
mod tests;
