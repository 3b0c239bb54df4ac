//! Card Surface
//!
//! The thing mutations render into. The browser side is a signal that the
//! card list redraws wholesale whenever it changes.

use leptos::prelude::*;

use crate::models::Item;

/// Receives a full replacement of the card area
pub trait CardView {
    /// Replace every card with `cards`
    fn render(&mut self, cards: &[Item]);
    /// Replace every card with a single notice
    fn show_error(&mut self, notice: &str);
}

/// What the card container currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Surface {
    /// Data not loaded yet
    #[default]
    Pending,
    Cards(Vec<Item>),
    Failed(String),
}

impl CardView for RwSignal<Surface> {
    fn render(&mut self, cards: &[Item]) {
        self.set(Surface::Cards(cards.to_vec()));
    }

    fn show_error(&mut self, notice: &str) {
        self.set(Surface::Failed(notice.to_string()));
    }
}
