#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};

    use super::super::{ProductList, ProductListState};
    use crate::api::Product;

    const VIEWPORT_ROWS: usize = 8;

    fn products(count: usize) -> Vec<Product> {
        (0..count)
            .map(|n| Product {
                title: format!("Product {n}"),
                price: n as f64,
            })
            .collect()
    }

    /// Collect the text of one buffer row, trailing blanks stripped
    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf.cell((x, y)).unwrap().symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn render(items: &[Product], state: &mut ProductListState) -> Buffer {
        let area = Rect::new(0, 0, 40, VIEWPORT_ROWS as u16);
        let mut buf = Buffer::empty(area);
        ProductList::new(items)
            .show_scrollbar(false)
            .render(area, &mut buf, state);
        buf
    }

    #[test]
    fn test_visible_range_at_top() {
        let state = ProductListState::new();

        // Viewport plus trailing overscan; nothing to overscan above
        assert_eq!(state.visible_range(30, VIEWPORT_ROWS), 0..11);
    }

    #[test]
    fn test_visible_range_mid_list() {
        let mut state = ProductListState::new();
        state.scroll.scroll_by(500.0, 30).unwrap();

        // First visible row is 10; overscan widens by 3 on both sides
        assert_eq!(state.first_visible(), 10);
        assert_eq!(state.visible_range(30, VIEWPORT_ROWS), 7..21);
    }

    #[test]
    fn test_visible_range_at_bottom() {
        let mut state = ProductListState::new();
        state.scroll.scroll_by(5000.0, 30).unwrap();

        // Clamped scroll lands on row 22; the range clips at the end
        assert_eq!(state.first_visible(), 22);
        assert_eq!(state.visible_range(30, VIEWPORT_ROWS), 19..30);
    }

    #[test]
    fn test_visible_range_empty_window() {
        let state = ProductListState::new();
        assert_eq!(state.visible_range(0, VIEWPORT_ROWS), 0..0);
    }

    #[test]
    fn test_visible_range_survives_stale_offset() {
        // The window can shrink under the scroll position after a trim;
        // the range must stay in bounds until the next scroll clamps it.
        let mut state = ProductListState::new();
        state.scroll.scroll_by(5000.0, 30).unwrap();

        let range = state.visible_range(5, VIEWPORT_ROWS);
        assert!(range.is_empty());
    }

    #[test]
    fn test_render_rows_from_top() {
        let items = products(30);
        let mut state = ProductListState::new();
        let buf = render(&items, &mut state);

        assert_eq!(row_text(&buf, 0), "Product 0 - $0");
        assert_eq!(row_text(&buf, 7), "Product 7 - $7");
    }

    #[test]
    fn test_render_respects_scroll_offset() {
        let items = products(30);
        let mut state = ProductListState::new();
        state.scroll.scroll_by(100.0, 30).unwrap();

        let buf = render(&items, &mut state);

        assert_eq!(row_text(&buf, 0), "Product 2 - $2");
        assert_eq!(row_text(&buf, 7), "Product 9 - $9");
    }

    #[test]
    fn test_render_empty_window_draws_nothing() {
        let mut state = ProductListState::new();
        let buf = render(&[], &mut state);

        for y in 0..VIEWPORT_ROWS as u16 {
            assert_eq!(row_text(&buf, y), "");
        }
    }

    #[test]
    fn test_render_short_window_leaves_tail_blank() {
        let items = products(3);
        let mut state = ProductListState::new();
        let buf = render(&items, &mut state);

        assert_eq!(row_text(&buf, 2), "Product 2 - $2");
        assert_eq!(row_text(&buf, 3), "");
    }

    #[test]
    fn test_row_text_formats_price_like_the_catalog() {
        let product = Product {
            title: "Essence Mascara Lash Princess".to_string(),
            price: 9.99,
        };
        let mut state = ProductListState::new();
        let buf = render(std::slice::from_ref(&product), &mut state);

        assert_eq!(row_text(&buf, 0), "Essence Mascara Lash Princess - $9.99");
    }
}
