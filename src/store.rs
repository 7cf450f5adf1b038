//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Everything here lives only as long as the page view.

use leptos::prelude::*;
use reactive_stores::Store;
use wish_core::{initial_quote, Catalog, Favorites, Quote};

/// Mutable page state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Items marked "Most Wanted"
    pub favorites: Favorites,
    /// Quote shown in the modal
    pub quote: Quote,
    /// A quote request is in flight
    pub quote_loading: bool,
    /// Modal visibility
    pub show_quote: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            favorites: Favorites::new(),
            quote: initial_quote(),
            quote_loading: false,
            show_quote: false,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Flip an item's favorite flag, ignoring ids missing from the catalog
pub fn store_toggle_favorite(store: &AppStore, id: u32, catalog: &Catalog) {
    if let Err(e) = store.favorites().write().toggle(id, catalog) {
        log::warn!("favorite toggle ignored: {}", e);
    }
}

/// Show a new quote and open the modal
pub fn store_show_quote(store: &AppStore, quote: Quote) {
    store.quote().set(quote);
    store.quote_loading().set(false);
    store.show_quote().set(true);
}
