use uuid::Uuid;

use super::catalog_constants::seed_menu;
use super::catalog_errors::Result;
use super::catalog_model::{Category, MenuItem, NewMenuItem};

/// In-memory store of the menu catalog.
///
/// Items keep their insertion order, matching the persisted blob layout. The
/// store trusts its caller for value ranges beyond `NewMenuItem::validate`;
/// stock is decremented only by the checkout transaction.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Creates a catalog from an existing item list (e.g. a restored blob).
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Creates a catalog populated with the seed menu.
    pub fn seeded() -> Self {
        Self::new(seed_menu())
    }

    /// Appends a new item. A fresh id is assigned when the caller did not
    /// supply one.
    pub fn create(&mut self, new_item: NewMenuItem) -> Result<MenuItem> {
        new_item.validate()?;

        let mut item: MenuItem = new_item.into();
        if item.id.is_empty() {
            item.id = Uuid::new_v4().to_string();
        }
        self.items.push(item.clone());
        Ok(item)
    }

    /// Replaces the item with a matching id. No-op if absent.
    pub fn update(&mut self, updated: MenuItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == updated.id) {
            *existing = updated;
        }
    }

    /// Removes the item with a matching id. No-op if absent.
    pub fn delete(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    /// Looks up an item by id.
    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Returns the full item listing in insertion order.
    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    /// Returns the items belonging to the given category.
    pub fn by_category(&self, category: Category) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|i| i.category == category)
            .collect()
    }

    /// Case-insensitive substring search on item names.
    pub fn search(&self, query: &str) -> Vec<&MenuItem> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|i| i.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Decrements the stock of the item with a matching id.
    ///
    /// Callers must have validated availability beforehand; the subtraction
    /// saturates so stock can never go negative.
    pub(crate) fn decrement_stock(&mut self, id: &str, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.stock = item.stock.saturating_sub(quantity);
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
