//! Product list widget
//!
//! Renders the settled list as a vertically scrollable stack of summary
//! cards, one per item in order, keeping the selected card in view.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use storefront_app::ListScreenState;

use super::summary_card::{SummaryCard, CARD_HEIGHT};

/// Scrollable collection of summary cards
pub struct ProductList<'a> {
    list: &'a ListScreenState,
}

impl<'a> ProductList<'a> {
    pub fn new(list: &'a ListScreenState) -> Self {
        Self { list }
    }

    /// Index of the first card drawn, chosen so the selected card is
    /// always inside the viewport
    fn first_visible(&self, visible: usize) -> usize {
        if visible == 0 {
            return 0;
        }
        let selected = self.list.selected;
        if selected < visible {
            0
        } else {
            selected + 1 - visible
        }
    }
}

impl Widget for ProductList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items = self.list.items();
        if items.is_empty() || area.height == 0 {
            return;
        }

        let visible = (area.height / CARD_HEIGHT) as usize;
        let start = self.first_visible(visible.max(1));

        for (slot, (index, product)) in items.iter().enumerate().skip(start).enumerate() {
            let y = area.y + (slot as u16) * CARD_HEIGHT;
            if y + CARD_HEIGHT > area.y + area.height {
                break;
            }
            let card_area = Rect {
                x: area.x,
                y,
                width: area.width,
                height: CARD_HEIGHT,
            };
            SummaryCard::new(product)
                .selected(index == self.list.selected)
                .render(card_area, buf);
        }
    }
}
