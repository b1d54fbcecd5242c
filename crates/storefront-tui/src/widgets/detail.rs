//! Product detail view
//!
//! Full detail rendering for one settled product: a horizontally paged
//! image gallery, pagination dots, then title, price, rating, category,
//! and description. The loading/error dispositions are handled by the
//! render dispatch, not here.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use storefront_app::DetailScreenState;
use storefront_core::Product;

use crate::theme::styles;

use super::pagination_dots::PaginationDots;

const GALLERY_HEIGHT: u16 = 8;

/// Detail screen content for a settled product
pub struct DetailView<'a> {
    detail: &'a DetailScreenState,
}

impl<'a> DetailView<'a> {
    pub fn new(detail: &'a DetailScreenState) -> Self {
        Self { detail }
    }
}

impl Widget for DetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(product) = self.detail.product() else {
            return;
        };

        let [gallery_area, dots_area, fields_area] = Layout::vertical([
            Constraint::Length(GALLERY_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        // Gallery and dots render nothing when there are no images
        if !product.images.is_empty() {
            let current = self
                .detail
                .gallery
                .current_image()
                .min(product.images.len() - 1);
            render_gallery_page(product, current, gallery_area, buf);
            PaginationDots::new(product.images.len(), current).render(dots_area, buf);
        }

        render_fields(product, fields_area, buf);
    }
}

/// One page of the horizontally paged gallery: the image reference for
/// the current index, framed, with a page caption
fn render_gallery_page(product: &Product, current: usize, area: Rect, buf: &mut Buffer) {
    let block = styles::card_block(false);
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let caption = format!("Image {} / {}", current + 1, product.images.len());
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("🖼".to_string(), styles::accent())),
        Line::from(Span::styled(
            product.images[current].clone(),
            styles::text_secondary(),
        )),
        Line::from(""),
        Line::from(Span::styled(caption, styles::text_muted())),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(inner, buf);
}

fn render_fields(product: &Product, area: Rect, buf: &mut Buffer) {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(product.title.clone(), styles::title())));
    lines.push(Line::from(""));

    // Price and rating on one row, rating fixed to one decimal place
    lines.push(Line::from(vec![
        Span::styled(format!("${:.2}", product.price), styles::price()),
        Span::raw("    "),
        Span::styled(format!("★ {:.1}", product.rating), styles::rating()),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Category", styles::text_muted())));
    lines.push(Line::from(Span::styled(
        product.category.clone(),
        styles::text_primary(),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Description", styles::text_muted())));
    lines.push(Line::from(Span::styled(
        product.description.clone(),
        styles::text_primary(),
    )));

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}
