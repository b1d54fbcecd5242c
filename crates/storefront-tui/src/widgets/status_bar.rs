//! Status bar widget
//!
//! One-line summary of the current screen's disposition: item count on
//! the list screen, product title on the detail screen, error marker when
//! a fetch has failed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use storefront_app::{AppState, Screen};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn status_line(&self) -> Line<'static> {
        match self.state.screen {
            Screen::List => {
                if self.state.list.lifecycle.is_loading() {
                    Line::from(Span::styled("Products · loading", styles::text_muted()))
                } else if self.state.list.lifecycle.error().is_some() {
                    Line::from(Span::styled("Products · fetch failed", styles::error_text()))
                } else {
                    let count = self.state.list.items().len();
                    Line::from(Span::styled(
                        format!("Products · {count} items"),
                        styles::text_secondary(),
                    ))
                }
            }
            Screen::Detail => {
                if self.state.detail.lifecycle.is_loading() {
                    Line::from(Span::styled("Product · loading", styles::text_muted()))
                } else if self.state.detail.lifecycle.error().is_some() {
                    Line::from(Span::styled("Product · fetch failed", styles::error_text()))
                } else if let Some(product) = self.state.detail.product() {
                    Line::from(Span::styled(
                        format!("Product · {}", product.title),
                        styles::text_secondary(),
                    ))
                } else {
                    Line::from(Span::styled("Product", styles::text_muted()))
                }
            }
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_line(area.x, area.y, &self.status_line(), area.width);
    }
}
