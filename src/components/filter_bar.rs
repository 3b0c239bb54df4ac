//! Filter Bar Component
//!
//! All / Active / Inactive selectors. Exactly one is pressed at a time.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::{FilterMode, FILTER_MODES};
use crate::store::{use_app_store, AppStateStoreFields};

fn filter_button_class(pressed: bool) -> &'static str {
    if pressed { "btn-filter active" } else { "btn-filter" }
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <nav class="filters" aria-label="Filter extensions">
            {FILTER_MODES
                .into_iter()
                .map(|mode: FilterMode| {
                    let is_current = move || store.filter().get() == mode;
                    view! {
                        <button
                            type="button"
                            class=move || filter_button_class(is_current())
                            aria-pressed=move || is_current().to_string()
                            data-filter=mode.as_attr()
                            on:click=move |_| ctx.set_filter(mode)
                        >
                            {mode.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
