use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{Category, MenuItem};

/// A cart line: a snapshot copy of a menu item's display fields plus a
/// positive quantity.
///
/// Snapshot semantics are deliberate: price and description must not change
/// retroactively if the catalog item is edited after being added to the
/// cart. Only stock is re-checked live against the catalog at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    pub quantity: u32,
}

impl CartLine {
    /// Snapshots a menu item into a cart line with the given quantity.
    pub fn from_item(item: &MenuItem, quantity: u32) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            category: item.category,
            image: item.image.clone(),
            calories: item.calories,
            quantity,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
