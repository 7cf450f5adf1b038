//! Christmas Wish List Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;
use wish_core::WishlistConfig;

/// Page settings, baked in at build time
const WISHLIST_JSON: &str = include_str!("../wishlist.json");

/// Send `log` output to the browser console
fn init_logging(level: LevelFilter) {
    if let Some(level) = level.to_level() {
        let _ = console_log::init_with_level(level);
    }
}

fn load_config() -> WishlistConfig {
    match WishlistConfig::from_json(WISHLIST_JSON) {
        Ok(config) => {
            init_logging(config.log_level());
            config
        }
        Err(e) => {
            let config = WishlistConfig::default();
            init_logging(config.log_level());
            log::error!("wishlist.json rejected, using built-in defaults: {}", e);
            config
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let config = load_config();
    log::info!("mounting {} ({} gifts)", config.title(), config.items.len());
    mount_to_body(move || view! { <App config=config /> });
}
