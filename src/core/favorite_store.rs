//! Favorite storage
//!
//! Favorites are immutable once stored, so the store only supports insertion
//! and lookup.

use crate::types::{Favorite, FavoriteId};
use std::collections::HashMap;

/// Owns all favorites, keyed by identifier
#[derive(Debug)]
pub struct FavoriteStore {
    favorites: HashMap<FavoriteId, Favorite>,

    /// Favorite identifiers in creation order
    order: Vec<FavoriteId>,
}

impl FavoriteStore {
    pub fn new() -> Self {
        FavoriteStore {
            favorites: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Store a new favorite and return a reference to the stored record
    ///
    /// On an identifier collision the first favorite wins.
    pub fn store(&mut self, favorite: Favorite) -> &Favorite {
        let id = favorite.id.clone();
        if !self.favorites.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.favorites.entry(id).or_insert(favorite)
    }

    pub fn get(&self, id: &str) -> Option<&Favorite> {
        self.favorites.get(id)
    }

    /// All favorites in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Favorite> {
        self.order.iter().filter_map(|id| self.favorites.get(id))
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }
}

impl Default for FavoriteStore {
    fn default() -> Self {
        Self::new()
    }
}
