//! Wish List App
//!
//! Main application component: decorations, countdown, card grid and the
//! quote button, stacked in a single column.

use leptos::prelude::*;
use reactive_stores::Store;
use wish_core::{Catalog, WishlistConfig};

use crate::components::{
    ChristmasCountdown, Decorations, MagicButton, PageFooter, PageHeader, QuoteModal, WishGrid,
};
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App(config: WishlistConfig) -> impl IntoView {
    let catalog = config.catalog().unwrap_or_else(|e| {
        log::error!("invalid wish items, showing the built-in list: {}", e);
        Catalog::default()
    });

    let title = config.title();
    let subtitle = config.subtitle.clone();
    let tick_ms = config.tick_ms;
    let snowflake_count = config.snowflake_count;
    let light_count = config.light_count;

    // Provide state and settings to all children
    let store = Store::new(AppState::default());
    provide_context(store);
    provide_context(AppContext::new(config, catalog, store));

    view! {
        <div class="app">
            <Decorations snowflake_count=snowflake_count light_count=light_count />
            <PageHeader title=title subtitle=subtitle />
            <ChristmasCountdown tick_ms=tick_ms />
            <WishGrid />
            <MagicButton />
            <QuoteModal />
            <PageFooter />
        </div>
    }
}
