//! Centered loading indicator

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Centered spinner shown while a screen's fetch is in flight
pub struct Spinner<'a> {
    message: &'a str,
}

impl<'a> Spinner<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for Spinner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(Line::from(format!("◌ {}", self.message)))
            .alignment(Alignment::Center)
            .style(styles::accent())
            .render(middle, buf);
    }
}
