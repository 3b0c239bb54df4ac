//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::loader::LoadError;
use crate::models::{FilterMode, Item};
use crate::store::AppStore;
use crate::surface::Surface;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Collection and filter mode
    pub store: AppStore,
    /// What the card container shows
    pub surface: RwSignal<Surface>,
}

impl AppContext {
    pub fn new(store: AppStore, surface: RwSignal<Surface>) -> Self {
        Self { store, surface }
    }

    pub fn load(&self, items: Vec<Item>) {
        let mut surface = self.surface;
        self.store.update(|state| state.replace_items(items, &mut surface));
    }

    pub fn fail_load(&self, err: &LoadError) {
        let mut surface = self.surface;
        self.store.with_untracked(|state| state.fail_load(err, &mut surface));
    }

    /// Remove a card for the rest of the session
    pub fn remove(&self, id: u32) {
        let mut surface = self.surface;
        self.store.update(|state| {
            state.remove_item(id, &mut surface);
        });
    }

    /// Flip a card between active and inactive
    pub fn toggle(&self, id: u32) {
        let mut surface = self.surface;
        self.store.update(|state| {
            state.toggle_item(id, &mut surface);
        });
    }

    pub fn set_filter(&self, mode: FilterMode) {
        let mut surface = self.surface;
        self.store.update(|state| state.set_filter(mode, &mut surface));
    }
}
