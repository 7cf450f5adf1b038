//! Wish Grid Component
//!
//! Lays out one card per catalog item, in catalog order.

use leptos::prelude::*;

use super::WishCard;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn WishGrid() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let items = ctx.catalog.with_value(|catalog| catalog.items().to_vec());
    let total = items.len();
    let click_flash_ms = ctx.config.with_value(|config| config.click_flash_ms);

    view! {
        <main class="wishes-container">
            <div class="wishes-grid">
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| view! { <WishCard item=item index=index click_flash_ms=click_flash_ms /> })
                    .collect_view()}
            </div>
            <p class="favorites-count">
                {move || format!("{} of {} marked as Most Wanted", store.favorites().read().len(), total)}
            </p>
        </main>
    }
}
