//! Wish Card Component
//!
//! One gift. Clicking the card toggles its "Most Wanted" mark.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wish_core::{card_animation_delay, WishItem};

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn WishCard(
    item: WishItem,
    index: usize,
    /// How long the "clicked" pulse lasts
    click_flash_ms: u32,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = item.id;
    let (hovered, set_hovered) = signal(false);
    let (clicked, set_clicked) = signal(false);

    let is_favorite = move || store.favorites().read().contains(id);

    let card_class = move || {
        let mut class = String::from("wish-card");
        if is_favorite() {
            class.push_str(" favorite");
        }
        if clicked.get() {
            class.push_str(" clicked");
        }
        class
    };

    let on_click = move |_| {
        set_clicked.set(true);
        ctx.toggle_favorite(id);
        Timeout::new(click_flash_ms, move || set_clicked.set(false)).forget();
    };

    // Links open in a new tab without toggling the card
    let link = item.has_link().then(|| item.link.clone()).flatten().map(|href| {
        view! {
            <a
                class="gift-link"
                href=href
                target="_blank"
                rel="noopener noreferrer"
                on:click=|ev| ev.stop_propagation()
            >
                "🔗 View gift"
            </a>
        }
    });

    view! {
        <div
            class=card_class
            style=format!("animation-delay: {:.1}s;", card_animation_delay(index))
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
            on:click=on_click
        >
            <div class="card-glow"></div>
            <Show when=is_favorite>
                <div class="favorite-badge">"⭐ Most Wanted!"</div>
            </Show>
            <div class="card-content">
                <div class="gift-icon">{item.icon}</div>
                <h3 class="item-name">{item.name}</h3>
                <p class="item-description">{item.description}</p>
                {link}
                <p class="click-hint">
                    {move || if is_favorite() { "★ Click to unmark" } else { "☆ Click to mark as Most Wanted" }}
                </p>
            </div>
            <div class=move || if hovered.get() { "sparkles active" } else { "sparkles" }>
                <span>"✨"</span>
                <span>"⭐"</span>
                <span>"✨"</span>
            </div>
        </div>
    }
}
