//! Extensions App
//!
//! Header with theme toggle, filter bar and the card list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CardList, FilterBar, ThemeToggle};
use crate::context::AppContext;
use crate::loader;
use crate::store::{AppState, AppStore};
use crate::surface::Surface;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = AppStore::new(AppState::default());
    let surface = RwSignal::new(Surface::default());
    let ctx = AppContext::new(store, surface);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load the collection once on mount
    Effect::new(move |_| {
        log::info!("[APP] Loading items");
        spawn_local(async move {
            match loader::fetch_items().await {
                Ok(items) => ctx.load(items),
                Err(err) => ctx.fail_load(&err),
            }
        });
    });

    view! {
        <div class="app-layout">
            <header class="header">
                <h1 class="header__title">"Extensions"</h1>
                <ThemeToggle />
            </header>

            <main class="main-content">
                <div class="toolbar">
                    <h2>"Extensions List"</h2>
                    <FilterBar />
                </div>
                <CardList surface=surface />
            </main>
        </div>
    }
}
