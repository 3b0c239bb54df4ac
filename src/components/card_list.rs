//! Card List Component
//!
//! Redraws the whole container every time the surface changes.

use leptos::prelude::*;

use crate::components::Card;
use crate::surface::Surface;

#[component]
pub fn CardList(surface: RwSignal<Surface>) -> impl IntoView {
    view! {
        <section id="cards-container" class="cards">
            {move || match surface.get() {
                Surface::Pending => ().into_any(),
                Surface::Cards(items) => items
                    .into_iter()
                    .map(|item| view! { <Card item=item /> })
                    .collect_view()
                    .into_any(),
                Surface::Failed(notice) => view! { <p>{notice}</p> }.into_any(),
            }}
        </section>
    }
}
