//! UI Components
//!
//! Leptos components making up the wish list page.

mod countdown;
mod decorations;
mod magic_button;
mod page_footer;
mod page_header;
mod quote_modal;
mod wish_card;
mod wish_grid;

pub use countdown::ChristmasCountdown;
pub use decorations::Decorations;
pub use magic_button::MagicButton;
pub use page_footer::PageFooter;
pub use page_header::PageHeader;
pub use quote_modal::QuoteModal;
pub use wish_card::WishCard;
pub use wish_grid::WishGrid;
