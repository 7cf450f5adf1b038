//! Page Configuration
//!
//! Settings read from `wishlist.json`. Missing fields take their defaults,
//! so an empty object is a valid config.

use serde::Deserialize;

use crate::catalog::{default_items, Catalog, WishItem};
use crate::error::ConfigError;

pub const DEFAULT_QUOTE_ENDPOINT: &str = "https://dummyjson.com/quotes/random";

/// Upper bound on snowflakes to keep the page responsive
pub const MAX_SNOWFLAKES: usize = 500;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WishlistConfig {
    /// Whose wish list this is
    pub owner: String,
    pub subtitle: String,
    pub quote_endpoint: String,
    pub snowflake_count: usize,
    pub light_count: usize,
    /// Countdown refresh interval
    pub tick_ms: u32,
    /// How long a card keeps its "clicked" look
    pub click_flash_ms: u32,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
    pub items: Vec<WishItem>,
}

impl Default for WishlistConfig {
    fn default() -> Self {
        Self {
            owner: "Arulraj V".to_string(),
            subtitle: "Dear Santa, here's what I'm wishing for this Christmas!".to_string(),
            quote_endpoint: DEFAULT_QUOTE_ENDPOINT.to_string(),
            snowflake_count: 50,
            light_count: 20,
            tick_ms: 1000,
            click_flash_ms: 300,
            log_level: "info".to_string(),
            items: default_items(),
        }
    }
}

impl WishlistConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if self.snowflake_count > MAX_SNOWFLAKES {
            return Err(ConfigError::TooManySnowflakes {
                count: self.snowflake_count,
                max: MAX_SNOWFLAKES,
            });
        }
        if self.quote_endpoint.trim().is_empty() {
            return Err(ConfigError::BlankEndpoint);
        }
        self.catalog()?;
        Ok(())
    }

    /// Validated catalog built from `items`
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        Ok(Catalog::new(self.items.clone())?)
    }

    pub fn title(&self) -> String {
        format!("{} Wish List", self.owner)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
