//! Custom widget components

mod detail;
mod header;
mod pagination_dots;
mod product_list;
mod spinner;
mod status_bar;
mod summary_card;
mod text;

pub use detail::DetailView;
pub use header::MainHeader;
pub use pagination_dots::PaginationDots;
pub use product_list::ProductList;
pub use spinner::Spinner;
pub use status_bar::StatusBar;
pub use summary_card::{SummaryCard, CARD_HEIGHT};
