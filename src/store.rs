//! Global Application State Store
//!
//! Owns the collection and the filter mode. Every mutation ends with one
//! full render of the filtered collection into a [`CardView`].

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::LOAD_ERROR_NOTICE;
use crate::filter::filter_items;
use crate::loader::LoadError;
use crate::models::{FilterMode, Item};
use crate::surface::CardView;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Collection from the last successful load
    pub items: Vec<Item>,
    /// Current filter, `All` until a filter button is clicked
    pub filter: FilterMode,
}

impl AppState {
    /// Cards the current filter lets through
    pub fn visible(&self) -> Vec<Item> {
        filter_items(&self.items, self.filter)
    }

    pub fn refresh(&self, view: &mut impl CardView) {
        view.render(&self.visible());
    }

    /// Swap in a freshly loaded collection
    pub fn replace_items(&mut self, items: Vec<Item>, view: &mut impl CardView) {
        log::info!("[STORE] Loaded {} items", items.len());
        self.items = items;
        self.refresh(view);
    }

    /// Leaves the collection as it is and shows the error notice
    pub fn fail_load(&self, err: &LoadError, view: &mut impl CardView) {
        log::error!("[STORE] Error loading data: {}", err);
        view.show_error(LOAD_ERROR_NOTICE);
    }

    /// Drop the item with `id`. Re-renders either way.
    pub fn remove_item(&mut self, id: u32, view: &mut impl CardView) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        log::debug!("[STORE] Remove {}: removed={}", id, removed);
        self.refresh(view);
        removed
    }

    /// Flip `is_active` on the item with `id`, returning the new state.
    /// Unknown ids are ignored without re-rendering.
    pub fn toggle_item(&mut self, id: u32, view: &mut impl CardView) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.is_active = !item.is_active;
        let now_active = item.is_active;
        log::debug!("[STORE] Toggle {}: active={}", id, now_active);
        self.refresh(view);
        Some(now_active)
    }

    pub fn set_filter(&mut self, mode: FilterMode, view: &mut impl CardView) {
        log::debug!("[STORE] Filter -> {}", mode.as_attr());
        self.filter = mode;
        self.refresh(view);
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Frame {
        Cards(Vec<u32>),
        Error(String),
    }

    #[derive(Default)]
    struct RecordingView {
        frames: Vec<Frame>,
    }

    impl RecordingView {
        fn last(&self) -> &Frame {
            self.frames.last().expect("nothing rendered")
        }
    }

    impl CardView for RecordingView {
        fn render(&mut self, cards: &[Item]) {
            self.frames.push(Frame::Cards(cards.iter().map(|c| c.id).collect()));
        }

        fn show_error(&mut self, notice: &str) {
            self.frames.push(Frame::Error(notice.to_string()));
        }
    }

    fn make_item(id: u32, is_active: bool) -> Item {
        Item {
            id,
            logo: format!("./logo-{}.svg", id),
            name: format!("Item {}", id),
            description: format!("Description {}", id),
            is_active,
        }
    }

    fn loaded(flags: &[bool]) -> (AppState, RecordingView) {
        let mut state = AppState::default();
        let mut view = RecordingView::default();
        let items = (0u32..).zip(flags).map(|(id, &on)| make_item(id, on)).collect();
        state.replace_items(items, &mut view);
        (state, view)
    }

    #[test]
    fn test_load_then_switch_filters() {
        let (mut state, mut view) = loaded(&[true, false, true]);
        assert_eq!(view.last(), &Frame::Cards(vec![0, 1, 2]));

        state.set_filter(FilterMode::Active, &mut view);
        assert_eq!(view.last(), &Frame::Cards(vec![0, 2]));

        state.set_filter(FilterMode::Inactive, &mut view);
        assert_eq!(view.last(), &Frame::Cards(vec![1]));

        state.set_filter(FilterMode::All, &mut view);
        assert_eq!(view.last(), &Frame::Cards(vec![0, 1, 2]));
    }

    #[test]
    fn test_same_filter_twice_renders_identically() {
        let (mut state, mut view) = loaded(&[true, false]);
        state.set_filter(FilterMode::Active, &mut view);
        state.set_filter(FilterMode::Active, &mut view);
        let n = view.frames.len();
        assert_eq!(view.frames[n - 1], view.frames[n - 2]);
    }

    #[test]
    fn test_remove_drops_exactly_one() {
        let (mut state, mut view) = loaded(&[true, false, true]);
        assert!(state.remove_item(1, &mut view));
        assert_eq!(state.items.len(), 2);
        assert!(state.items.iter().all(|i| i.id != 1));
        assert_eq!(view.last(), &Frame::Cards(vec![0, 2]));
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let (mut state, mut view) = loaded(&[true, false]);
        let before = state.items.clone();
        assert!(!state.remove_item(42, &mut view));
        assert_eq!(state.items, before);
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let (mut state, mut view) = loaded(&[true, false, true]);
        let before = state.items.clone();
        assert_eq!(state.toggle_item(2, &mut view), Some(false));

        let changed: Vec<u32> = state
            .items
            .iter()
            .zip(&before)
            .filter(|(now, was)| now != was)
            .map(|(now, _)| now.id)
            .collect();
        assert_eq!(changed, vec![2]);
        assert!(!state.items[2].is_active);
    }

    #[test]
    fn test_toggle_unknown_does_not_render() {
        let (mut state, mut view) = loaded(&[true]);
        let frames = view.frames.len();
        assert_eq!(state.toggle_item(9, &mut view), None);
        assert_eq!(view.frames.len(), frames);
    }

    #[test]
    fn test_toggle_off_in_active_mode_hides_card() {
        let (mut state, mut view) = loaded(&[true, false, true]);
        state.set_filter(FilterMode::Active, &mut view);
        assert_eq!(view.last(), &Frame::Cards(vec![0, 2]));

        state.toggle_item(0, &mut view);
        assert_eq!(view.last(), &Frame::Cards(vec![2]));
    }

    #[test]
    fn test_toggle_on_in_inactive_mode_hides_card() {
        let (mut state, mut view) = loaded(&[true, false, false]);
        state.set_filter(FilterMode::Inactive, &mut view);
        state.toggle_item(1, &mut view);
        assert_eq!(view.last(), &Frame::Cards(vec![2]));
    }

    #[test]
    fn test_toggle_in_all_mode_keeps_card() {
        let (mut state, mut view) = loaded(&[true, false]);
        state.toggle_item(1, &mut view);
        assert_eq!(view.last(), &Frame::Cards(vec![0, 1]));
        assert!(state.items[1].is_active);
    }

    #[test]
    fn test_failed_load_shows_only_notice() {
        let state = AppState::default();
        let mut view = RecordingView::default();
        state.fail_load(&LoadError::Network("offline".into()), &mut view);

        assert_eq!(view.frames, vec![Frame::Error(LOAD_ERROR_NOTICE.to_string())]);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_failed_reload_keeps_collection() {
        let (state, mut view) = loaded(&[true, true]);
        state.fail_load(&LoadError::Status(500), &mut view);
        assert_eq!(state.items.len(), 2);
        assert!(matches!(view.last(), Frame::Error(_)));
    }
}
