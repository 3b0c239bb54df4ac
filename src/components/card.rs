//! Card Component
//!
//! One extension: logo, text, remove button and active switch.

use leptos::prelude::*;

use crate::config::{TOGGLE_OFF_ICON, TOGGLE_ON_ICON};
use crate::context::AppContext;
use crate::models::Item;
use crate::sanitize::escape_html;

/// Title and description markup with both texts escaped
pub fn card_content_markup(name: &str, description: &str) -> String {
    format!(
        r#"<h3 class="card__title">{}</h3><p class="card__desc">{}</p>"#,
        escape_html(name),
        escape_html(description)
    )
}

/// Keys that activate the switch from the keyboard
pub fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

#[component]
pub fn Card(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = item.id;
    let is_active = item.is_active;
    let content = card_content_markup(&item.name, &item.description);
    let (logo_failed, set_logo_failed) = signal(false);

    view! {
        <article class="card" data-id=id.to_string()>
            <div class="card__logo">
                <img
                    src=item.logo.clone()
                    alt=format!("Logo of {}", item.name)
                    loading="lazy"
                    style=move || if logo_failed.get() { "display: none" } else { "" }
                    on:error=move |_| set_logo_failed.set(true)
                />
            </div>

            <div class="card__content" inner_html=content></div>

            <button
                class="btn-remove"
                type="button"
                aria-label=format!("Remove {}", item.name)
                on:click=move |_| ctx.remove(id)
            >
                "Remove"
            </button>

            <img
                class="toggle-icon"
                src=if is_active { TOGGLE_ON_ICON } else { TOGGLE_OFF_ICON }
                alt=""
                role="switch"
                aria-checked=is_active.to_string()
                tabindex="0"
                on:click=move |_| ctx.toggle(id)
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if is_activation_key(&ev.key()) {
                        ev.prevent_default();
                        ctx.toggle(id);
                    }
                }
            />
        </article>
    }
}
