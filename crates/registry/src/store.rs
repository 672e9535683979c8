use std::collections::HashMap;

use entrepot_catalog::{ProductId, StockItem};
use entrepot_core::{DomainError, DomainResult, Entity};

/// In-memory registry of stock items, keyed by product id.
///
/// Generic over [`StockItem`], so any entity exposing an id, a name and a
/// price can be stored. Ids are unique within one registry and validated at
/// insertion; enumeration order is that of the backing map and is
/// unspecified.
#[derive(Debug)]
pub struct Registry<T> {
    items: HashMap<ProductId, T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
        }
    }
}

impl<T: StockItem> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `item`, keyed by its id.
    ///
    /// Rejects blank ids and ids already present; a rejected insert leaves
    /// the registry untouched.
    pub fn add(&mut self, item: T) -> DomainResult<()> {
        if item.id().is_blank() {
            return Err(DomainError::invalid_id(format!(
                "product id {:?} is blank",
                item.id().as_str()
            )));
        }
        if self.items.contains_key(item.id()) {
            return Err(DomainError::invalid_id(format!(
                "a product with id {} already exists",
                item.id()
            )));
        }
        let id = item.id().clone();
        self.items.insert(id, item);
        Ok(())
    }

    /// Direct lookup by id.
    ///
    /// Absence is an expected outcome here, so this returns an `Option`
    /// rather than an error. Name lookups, where a miss is exceptional, go
    /// through [`Registry::find_by_name`] instead.
    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.get(id)
    }

    /// Owned snapshot of every stored item, in unspecified order.
    ///
    /// Mutating the returned vector does not affect the registry.
    pub fn list_all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.values().cloned().collect()
    }

    /// Remove and return the entry for `id`. Removing an absent id is a
    /// no-op, not an error.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        self.items.remove(id)
    }

    /// Every item priced at or above `threshold`, in unspecified order.
    pub fn filter_by_min_price(&self, threshold: f64) -> Vec<&T> {
        self.items
            .values()
            .filter(|item| item.price() >= threshold)
            .collect()
    }

    /// Case-insensitive exact-match lookup by name.
    ///
    /// When several items share a name, which one is returned is unspecified
    /// (map enumeration order). A miss is an error carrying the searched
    /// name.
    pub fn find_by_name(&self, name: &str) -> DomainResult<&T> {
        let needle = name.to_lowercase();
        self.items
            .values()
            .find(|item| item.name().to_lowercase() == needle)
            .ok_or_else(|| DomainError::not_found(format!("no product named {name:?}")))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
