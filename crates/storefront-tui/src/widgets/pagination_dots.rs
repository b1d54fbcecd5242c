//! Gallery pagination indicator
//!
//! One dot per image, centered; the dot matching the current image is
//! visually distinguished.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

const ACTIVE_DOT: &str = "●";
const INACTIVE_DOT: &str = "○";

/// Row of pagination dots for a paged gallery
pub struct PaginationDots {
    count: usize,
    active: usize,
}

impl PaginationDots {
    pub fn new(count: usize, active: usize) -> Self {
        Self { count, active }
    }
}

impl Widget for PaginationDots {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.count == 0 || area.height == 0 {
            return;
        }

        let mut spans = Vec::with_capacity(self.count * 2);
        for index in 0..self.count {
            if index > 0 {
                spans.push(Span::raw(" "));
            }
            if index == self.active {
                spans.push(Span::styled(
                    ACTIVE_DOT,
                    ratatui::style::Style::default().fg(palette::DOT_ACTIVE),
                ));
            } else {
                spans.push(Span::styled(
                    INACTIVE_DOT,
                    ratatui::style::Style::default().fg(palette::DOT_INACTIVE),
                ));
            }
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .style(styles::text_muted())
            .render(area, buf);
    }
}
