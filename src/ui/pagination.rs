//! Pagination control.
//!
//! Renders previous/next controls and a numbered window around the current
//! page. The active page's button has no press handler, so a page-change
//! message fires exactly once per user-initiated change and never for the
//! page already shown.

use cosmic::iced::Alignment;
use cosmic::{Element, cosmic_theme, widget};

use crate::Message;
use crate::constants::PAGINATION_WINDOW;
use crate::fl;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PageItem {
    Page(u32),
    Gap,
}

/// Pages (and gaps) to render for a pagination row of at most `max_len`
/// entries. The first, last, and current pages are always present.
pub fn page_window(current: u32, total: u32, max_len: usize) -> Vec<PageItem> {
    let max = max_len.max(5) as u32;
    if total <= max {
        return (1..=total).map(PageItem::Page).collect();
    }

    // First and last page take two slots; the rest is a window around the
    // current page, trading an edge slot for a gap marker where the window
    // is not adjacent to an edge
    let middle = max - 2;
    let mut start = current.saturating_sub(middle / 2).max(2);
    let mut end = start + middle - 1;
    if end >= total {
        end = total - 1;
        start = end + 1 - middle;
    }

    let mut items = vec![PageItem::Page(1)];
    if start > 2 {
        items.push(PageItem::Gap);
        start += 1;
    }
    let trailing_gap = end < total - 1;
    if trailing_gap {
        end -= 1;
    }
    items.extend((start..=end).map(PageItem::Page));
    if trailing_gap {
        items.push(PageItem::Gap);
    }
    items.push(PageItem::Page(total));
    items
}

pub fn pagination_row<'a>(
    current: u32,
    total: u32,
    spacing: &cosmic_theme::Spacing,
) -> Element<'a, Message> {
    let mut row = widget::row::with_capacity(PAGINATION_WINDOW + 2)
        .spacing(spacing.space_xxs)
        .align_y(Alignment::Center);

    row = row.push(
        widget::button::icon(widget::icon::from_name("go-previous-symbolic"))
            .on_press_maybe((current > 1).then(|| Message::PageChange(current - 1))),
    );

    for item in page_window(current, total, PAGINATION_WINDOW) {
        row = match item {
            PageItem::Page(page) if page == current => {
                // Active page: shown, never fires
                row.push(widget::button::suggested(page.to_string()))
            }
            PageItem::Page(page) => row.push(
                widget::button::text(page.to_string()).on_press(Message::PageChange(page)),
            ),
            PageItem::Gap => row.push(widget::text::body("…")),
        };
    }

    row = row.push(
        widget::button::icon(widget::icon::from_name("go-next-symbolic"))
            .on_press_maybe((current < total).then(|| Message::PageChange(current + 1))),
    );

    widget::column::with_children(vec![
        row.into(),
        widget::text::caption(fl!("page-of", current = current, total = total)).into(),
    ])
    .spacing(spacing.space_xxs)
    .align_x(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(items: &[PageItem]) -> Vec<u32> {
        items
            .iter()
            .filter_map(|item| match item {
                PageItem::Page(page) => Some(*page),
                PageItem::Gap => None,
            })
            .collect()
    }

    #[test]
    fn small_totals_render_every_page() {
        assert_eq!(pages(&page_window(1, 1, 7)), vec![1]);
        assert_eq!(pages(&page_window(3, 7, 7)), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_at_the_start_gaps_the_tail() {
        assert_eq!(
            page_window(1, 10, 7),
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Page(4),
                PageItem::Page(5),
                PageItem::Gap,
                PageItem::Page(10),
            ]
        );
    }

    #[test]
    fn window_in_the_middle_gaps_both_sides() {
        assert_eq!(
            page_window(5, 10, 7),
            vec![
                PageItem::Page(1),
                PageItem::Gap,
                PageItem::Page(4),
                PageItem::Page(5),
                PageItem::Page(6),
                PageItem::Gap,
                PageItem::Page(10),
            ]
        );
    }

    #[test]
    fn window_at_the_end_gaps_the_head() {
        assert_eq!(
            page_window(10, 10, 7),
            vec![
                PageItem::Page(1),
                PageItem::Gap,
                PageItem::Page(6),
                PageItem::Page(7),
                PageItem::Page(8),
                PageItem::Page(9),
                PageItem::Page(10),
            ]
        );
    }

    #[test]
    fn window_always_contains_current_and_edges() {
        for total in 1..=40u32 {
            for current in 1..=total {
                let items = page_window(current, total, 7);
                let pages = pages(&items);
                assert!(items.len() <= 7, "{}/{}: {:?}", current, total, items);
                assert!(pages.contains(&current));
                assert!(pages.contains(&1));
                assert!(pages.contains(&total));
            }
        }
    }
}
