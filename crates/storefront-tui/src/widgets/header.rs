//! Header bar widget
//!
//! Shows the app title and the keybindings for the current screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use storefront_app::Screen;

use crate::theme::{palette, styles};

/// Main header with app title and key hints
pub struct MainHeader {
    screen: Screen,
}

impl MainHeader {
    pub fn new(screen: Screen) -> Self {
        Self { screen }
    }

    fn key_hints(&self) -> &'static str {
        match self.screen {
            Screen::List => "↑/↓ select · Enter open · q quit",
            Screen::Detail => "←/→ gallery · Esc back · q quit",
        }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::styled("Storefront", styles::title()),
            Span::raw("  "),
            Span::styled(self.key_hints(), styles::keybinding()),
        ]);
        buf.set_line(inner.x, inner.y, &line, inner.width);
    }
}
