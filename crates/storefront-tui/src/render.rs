//! Top-level render dispatch
//!
//! Rendering policy per screen, evaluated in order: loading shows only a
//! spinner, a settled error shows only the error text, otherwise the
//! screen's content widget draws the settled data.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use storefront_app::{AppState, Screen, PRODUCT_NOT_FOUND};

use crate::theme::styles;
use crate::widgets::{DetailView, MainHeader, ProductList, Spinner, StatusBar};

/// Render the whole UI for the current state
pub fn view(frame: &mut Frame, state: &AppState) {
    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(MainHeader::new(state.screen), header_area);

    match state.screen {
        Screen::List => render_list(frame, state, body_area),
        Screen::Detail => render_detail(frame, state, body_area),
    }

    frame.render_widget(StatusBar::new(state), status_area);
}

fn render_list(frame: &mut Frame, state: &AppState, area: Rect) {
    if state.list.lifecycle.is_loading() {
        frame.render_widget(Spinner::new("Loading products..."), area);
        return;
    }
    if let Some(error) = state.list.lifecycle.error() {
        render_error(frame, error, area);
        return;
    }
    frame.render_widget(ProductList::new(&state.list), area);
}

fn render_detail(frame: &mut Frame, state: &AppState, area: Rect) {
    if state.detail.lifecycle.is_loading() {
        frame.render_widget(Spinner::new("Loading product..."), area);
        return;
    }
    if let Some(error) = state.detail.lifecycle.error() {
        render_error(frame, error, area);
        return;
    }
    if state.detail.product().is_none() {
        // Settled without data and without a recorded error
        render_error(frame, PRODUCT_NOT_FOUND, area);
        return;
    }
    frame.render_widget(DetailView::new(&state.detail), area);
}

/// Centered error text, the only output for a failed screen
fn render_error(frame: &mut Frame, message: &str, area: Rect) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(message.to_string()))
            .alignment(Alignment::Center)
            .style(styles::error_text()),
        middle,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use storefront_app::{update, Message, DETAIL_FETCH_ERROR, LIST_FETCH_ERROR};
    use storefront_core::{Product, ProductSummary};

    fn summaries(n: u64) -> Vec<ProductSummary> {
        (1..=n)
            .map(|id| ProductSummary {
                id,
                title: format!("Product {id}"),
                description: "desc".to_string(),
                thumbnail: format!("https://cdn.example.com/{id}.jpg"),
                price: 9.99,
                rating: 4.0,
            })
            .collect()
    }

    fn product(image_count: usize) -> Product {
        Product {
            id: 1,
            title: "Essence Mascara Lash Princess".to_string(),
            description: "Popular mascara known for its volumizing effects.".to_string(),
            price: 9.99,
            rating: 4.5,
            category: "beauty".to_string(),
            thumbnail: "https://cdn.example.com/1/thumb.jpg".to_string(),
            images: (0..image_count)
                .map(|i| format!("https://cdn.example.com/1/{i}.jpg"))
                .collect(),
        }
    }

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in buf.area.top()..buf.area.bottom() {
            for x in buf.area.left()..buf.area.right() {
                out.push_str(buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
            }
            out.push('\n');
        }
        out
    }

    /// Full-screen render through the same dispatch the event loop uses
    fn render_screen(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
        terminal.draw(|frame| view(frame, state)).expect("draw");
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_loading_list_shows_only_spinner() {
        let mut state = AppState::new();
        update(&mut state, Message::MountList);

        let text = render_screen(&state);
        assert!(text.contains("Loading products..."));
        // no cards while loading
        assert!(!text.contains('▶'));
        assert!(!text.contains('▦'));
        assert!(!text.contains("Product 1"));
    }

    #[test]
    fn test_failed_list_shows_only_error_text() {
        let mut state = AppState::new();
        update(&mut state, Message::MountList);
        update(
            &mut state,
            Message::ListFailed {
                error: "connection refused".to_string(),
            },
        );

        let text = render_screen(&state);
        assert_eq!(text.matches(LIST_FETCH_ERROR).count(), 1);
        // the underlying cause never reaches the screen
        assert!(!text.contains("connection refused"));
        // no cards alongside the error: no markers, no card frames
        // beyond the header's own block
        assert!(!text.contains('▶'));
        assert!(!text.contains('▦'));
        assert_eq!(text.matches('╭').count(), 1);
    }

    #[test]
    fn test_settled_list_shows_cards() {
        let mut state = AppState::new();
        update(&mut state, Message::MountList);
        update(
            &mut state,
            Message::ListLoaded {
                products: summaries(2),
            },
        );

        let text = render_screen(&state);
        assert!(text.contains("Product 1"));
        assert!(text.contains("Product 2"));
        assert!(text.contains('▶'));
        assert!(!text.contains(LIST_FETCH_ERROR));
    }

    #[test]
    fn test_loading_detail_shows_only_spinner() {
        let mut state = AppState::new();
        update(&mut state, Message::OpenProduct { id: 1 });

        let text = render_screen(&state);
        assert!(text.contains("Loading product..."));
        assert!(!text.contains('●'));
        assert!(!text.contains('○'));
    }

    #[test]
    fn test_failed_detail_shows_only_error_text() {
        let mut state = AppState::new();
        update(&mut state, Message::OpenProduct { id: 1 });
        let seq = state.detail.request_seq;
        update(
            &mut state,
            Message::ProductFailed {
                seq,
                error: "500 Internal Server Error".to_string(),
            },
        );

        let text = render_screen(&state);
        assert_eq!(text.matches(DETAIL_FETCH_ERROR).count(), 1);
        // no gallery, dots, or fields alongside the error
        assert!(!text.contains('●'));
        assert!(!text.contains('○'));
        assert!(!text.contains("Image 1"));
        assert!(!text.contains("Description"));
    }

    #[test]
    fn test_settled_detail_shows_content() {
        let mut state = AppState::new();
        update(&mut state, Message::OpenProduct { id: 1 });
        let seq = state.detail.request_seq;
        update(
            &mut state,
            Message::ProductLoaded {
                seq,
                product: Box::new(product(2)),
            },
        );

        let text = render_screen(&state);
        assert!(text.contains("Essence Mascara"));
        assert!(text.contains("$9.99"));
        assert!(text.contains('●'));
        assert!(!text.contains(DETAIL_FETCH_ERROR));
    }

    #[test]
    fn test_detail_settled_without_product_reports_not_found() {
        let mut state = AppState::new();
        state.screen = Screen::Detail;

        let text = render_screen(&state);
        assert!(text.contains(PRODUCT_NOT_FOUND));
        assert!(!text.contains('●'));
    }
}
