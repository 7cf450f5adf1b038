//! Wish Item Catalog
//!
//! The fixed, ordered list of gifts shown as cards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{WishError, WishResult};

/// One gift on the wish list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishItem {
    pub id: u32,
    pub name: String,
    /// Emoji glyph shown on the card
    pub icon: String,
    pub description: String,
    /// Optional purchase link
    #[serde(default)]
    pub link: Option<String>,
}

impl WishItem {
    pub fn new(id: u32, name: &str, icon: &str, description: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
            link: None,
        }
    }

    #[cfg(test)]
    pub fn with_link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }

    pub fn has_link(&self) -> bool {
        self.link.as_deref().is_some_and(|l| !l.trim().is_empty())
    }
}

/// The built-in wish list
pub fn default_items() -> Vec<WishItem> {
    vec![
        WishItem::new(1, "Men's Jackets", "🧥", "Stylish and warm jackets for the winter season"),
        WishItem::new(2, "Remote Control JCB", "🚜", "Awesome RC JCB excavator for hours of fun"),
        WishItem::new(3, "Remote Control Tractor", "🚜", "Farm-style RC tractor with realistic sounds"),
        WishItem::new(4, "Remote Control Train", "🚂", "Classic RC train set with tracks and accessories"),
        WishItem::new(5, "Boys Kids Ray-Ban Sunglasses", "🕶️", "Cool Ray-Ban style sunglasses for kids"),
        WishItem::new(6, "Remote Control Lorry", "🚛", "Big RC truck/lorry with working lights"),
    ]
}

/// Entrance animation delay in seconds for the card at `index`
pub fn card_animation_delay(index: usize) -> f64 {
    index as f64 * 0.1
}

/// Validated, ordered collection of wish items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<WishItem>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and blank names
    pub fn new(items: Vec<WishItem>) -> WishResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(WishError::DuplicateItem(item.id));
            }
            if item.name.trim().is_empty() {
                return Err(WishError::EmptyName(item.id));
            }
        }
        Ok(Self { items })
    }

    pub fn get(&self, id: u32) -> Option<&WishItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn items(&self) -> &[WishItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self { items: default_items() }
    }
}
