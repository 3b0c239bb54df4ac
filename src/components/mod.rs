//! UI Components
//!
//! Leptos components for the card page.

mod card;
mod card_list;
mod filter_bar;
mod theme_toggle;

pub use card::Card;
pub use card_list::CardList;
pub use filter_bar::FilterBar;
pub use theme_toggle::ThemeToggle;
