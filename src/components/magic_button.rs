//! Magic Button Component
//!
//! Fetches a random quote and opens the quote modal. Failures fall back to
//! a local Santa quote, so the modal always opens.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::store::{store_show_quote, use_app_store, AppStateStoreFields};

#[component]
pub fn MagicButton() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let loading = move || store.quote_loading().get();

    let on_click = move |_| {
        if store.quote_loading().get_untracked() {
            return;
        }
        store.quote_loading().set(true);
        let endpoint = ctx.config.with_value(|config| config.quote_endpoint.clone());

        spawn_local(async move {
            let fetched = commands::fetch_random_quote(&endpoint).await;
            let mut rng = js_sys::Math::random;
            let resolution = wish_core::resolve(fetched, &mut rng);
            log::info!(
                "showing {} quote",
                if resolution.is_fallback() { "fallback" } else { "remote" }
            );
            store_show_quote(&store, resolution.into_quote());
        });
    };

    view! {
        <div class="send-section">
            <button class="send-btn" on:click=on_click disabled=loading>
                {move || if loading() {
                    view! {
                        <span class="btn-icon">"✨"</span>
                        "Santa is writing..."
                        <span class="loading-dots">"..."</span>
                    }.into_any()
                } else {
                    view! {
                        <span class="btn-icon">"✨"</span>
                        "Receive Christmas Magic!"
                        <span class="btn-icon">"🎅"</span>
                    }.into_any()
                }}
            </button>
        </div>
    }
}
