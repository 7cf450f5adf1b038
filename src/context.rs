//! Application Context
//!
//! Read-only page settings shared via the Leptos Context API.

use leptos::prelude::*;
use wish_core::{Catalog, WishlistConfig};

use crate::store::{store_toggle_favorite, AppStore};

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Settings loaded at startup
    pub config: StoredValue<WishlistConfig>,
    /// Gifts shown on the page
    pub catalog: StoredValue<Catalog>,
    store: AppStore,
}

impl AppContext {
    pub fn new(config: WishlistConfig, catalog: Catalog, store: AppStore) -> Self {
        Self {
            config: StoredValue::new(config),
            catalog: StoredValue::new(catalog),
            store,
        }
    }

    /// Toggle "Most Wanted" on a gift
    pub fn toggle_favorite(&self, id: u32) {
        let store = self.store;
        self.catalog.with_value(|catalog| store_toggle_favorite(&store, id, catalog));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
