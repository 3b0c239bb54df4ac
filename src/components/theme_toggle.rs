//! Theme Toggle Component
//!
//! Button in the header that flips between light and dark.

use leptos::prelude::*;

use crate::theme::{apply_theme, BrowserStorage, ThemeController};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let controller = StoredValue::new_local(ThemeController::load(BrowserStorage::open()));
    let (theme, set_theme) = signal(controller.with_value(|c| c.theme()));

    // Apply before the first paint, then follow the signal
    apply_theme(theme.get_untracked());
    Effect::new(move |_| apply_theme(theme.get()));

    let toggle = move |_| {
        controller.update_value(|c| set_theme.set(c.toggle()));
    };

    view! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            type="button"
            aria-label=move || theme.get().toggle_label()
            on:click=toggle
        >
            <img
                src=move || theme.get().toggle_icon()
                alt=move || theme.get().toggle_icon_alt()
                style="width: 1.5em; height: 1.5em;"
            />
        </button>
    }
}
