//! Wish List Core
//!
//! Platform-independent logic behind the wish list page:
//! - catalog: the gifts on the list
//! - favorites: which gifts are marked "Most Wanted"
//! - countdown: time left until the next Christmas morning
//! - quote: remote quote decoration and local fallback
//! - decorations: snowflakes and light bulbs
//! - config: page settings loaded from JSON

mod catalog;
mod config;
mod countdown;
mod decorations;
mod error;
mod favorites;
mod quote;
mod random;

pub use catalog::{card_animation_delay, default_items, Catalog, WishItem};
pub use config::{WishlistConfig, DEFAULT_QUOTE_ENDPOINT, MAX_SNOWFLAKES};
pub use countdown::{countdown_until, countdown_until_christmas, next_christmas, Countdown};
pub use decorations::{generate_snowflakes, light_bulbs, LightBulb, Snowflake, LIGHT_COLORS};
pub use error::{ConfigError, QuoteError, WishError, WishResult};
pub use favorites::Favorites;
pub use quote::{
    decorate, initial_quote, resolve, Quote, RemoteQuote, Resolution, CHRISTMAS_ICONS,
    CHRISTMAS_TITLES, FALLBACK_QUOTES,
};
pub use random::RandomSource;
