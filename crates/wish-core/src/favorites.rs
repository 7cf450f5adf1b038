//! Favorites
//!
//! In-memory "Most Wanted" markers. Every id refers to an item in the catalog.

use crate::catalog::Catalog;
use crate::error::{WishError, WishResult};

/// Favorite item ids in the order they were marked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<u32>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the favorite state of `id`.
    ///
    /// Returns `true` if the item is now a favorite.
    pub fn toggle(&mut self, id: u32, catalog: &Catalog) -> WishResult<bool> {
        if !catalog.contains(id) {
            return Err(WishError::UnknownItem(id));
        }
        if let Some(pos) = self.ids.iter().position(|&fav| fav == id) {
            self.ids.remove(pos);
            log::debug!("unmarked item {} as most wanted", id);
            Ok(false)
        } else {
            self.ids.push(id);
            log::debug!("marked item {} as most wanted", id);
            Ok(true)
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_on_and_off() {
        let catalog = Catalog::default();
        let mut favs = Favorites::new();

        assert_eq!(favs.toggle(2, &catalog), Ok(true));
        assert!(favs.contains(2));
        assert_eq!(favs.toggle(2, &catalog), Ok(false));
        assert!(!favs.contains(2));
        assert!(favs.is_empty());
    }

    #[test]
    fn test_insertion_order() {
        let catalog = Catalog::default();
        let mut favs = Favorites::new();
        for id in [4, 1, 6] {
            favs.toggle(id, &catalog).unwrap();
        }
        favs.toggle(1, &catalog).unwrap();
        assert_eq!(favs.ids(), &[4, 6]);
        assert_eq!(favs.len(), 2);
    }

    #[test]
    fn test_unknown_item_rejected() {
        let catalog = Catalog::default();
        let mut favs = Favorites::new();
        assert_eq!(favs.toggle(42, &catalog), Err(WishError::UnknownItem(42)));
        assert!(favs.is_empty());
    }
}
