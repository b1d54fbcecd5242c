//! Summary card widget
//!
//! Compact list-item representation of one product: thumbnail marker,
//! title on one line, description truncated to two lines. Pure function
//! of its inputs; holds no state. Activation (Enter) is mapped by the key
//! handler in storefront-app, not here.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use storefront_core::ProductSummary;

use crate::theme::styles;

use super::text::{truncate_line, wrap_truncated};

/// Total height of one card including borders
pub const CARD_HEIGHT: u16 = 5;

/// One product rendered as a card
pub struct SummaryCard<'a> {
    product: &'a ProductSummary,
    selected: bool,
}

impl<'a> SummaryCard<'a> {
    pub fn new(product: &'a ProductSummary) -> Self {
        Self {
            product,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for SummaryCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.selected);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let width = inner.width as usize;

        // Title row: thumbnail marker + one-line title
        let marker = if self.selected { "▶ " } else { "▦ " };
        let title = truncate_line(&self.product.title, width.saturating_sub(2));
        let title_line = Line::from(vec![
            Span::styled(marker, styles::accent()),
            Span::styled(title, styles::title()),
        ]);
        buf.set_line(inner.x, inner.y, &title_line, inner.width);

        // Description: at most two lines, truncation is display-only
        let desc_lines = wrap_truncated(&self.product.description, width, 2);
        for (i, text) in desc_lines.iter().enumerate() {
            let y = inner.y + 1 + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let line = Line::from(Span::styled(text.clone(), styles::text_secondary()));
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
