//! Quote Modal Component
//!
//! Overlay showing the current quote. Any click closes it.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

const MESSAGE_EMOJIS: &[&str] = &["🦌", "🎄", "🎁", "⭐", "❄️"];

#[component]
pub fn QuoteModal() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.show_quote().get()>
            <div class="success-message" on:click=move |_| store.show_quote().set(false)>
                <div class="message-content">
                    <span class="message-icon">{move || store.quote().read().icon.clone()}</span>
                    <h2>{move || store.quote().read().title.clone()}</h2>
                    <p class="quote-message">{move || store.quote().read().message.clone()}</p>
                    <div class="message-emojis">
                        {MESSAGE_EMOJIS.iter().map(|e| view! { <span>{*e}</span> }).collect_view()}
                    </div>
                    <button class="close-btn">"Get More Christmas Magic! ✨"</button>
                </div>
            </div>
        </Show>
    }
}
