use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog_errors::{CatalogError, Result};

/// Menu category. Serialized with the capitalized spellings used by the
/// persisted blobs ("Drinks", "Snacks", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Drinks,
    Snacks,
    Combos,
    Specials,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Drinks => "Drinks",
            Category::Snacks => "Snacks",
            Category::Combos => "Combos",
            Category::Specials => "Specials",
        }
    }
}

/// Domain model for a purchasable menu item.
///
/// Stock is a `u32`, so it can never go negative. It is mutated only by
/// admin edits and by the checkout stock decrement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub image: String,
    pub available: bool,
    pub stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
}

/// Input model for creating a new menu item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub image: String,
    pub available: bool,
    pub stock: u32,
    pub calories: Option<u32>,
}

impl NewMenuItem {
    /// Validates the new menu item data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::Validation(
                "Menu item name cannot be empty".to_string(),
            ));
        }
        if self.price < Decimal::ZERO {
            return Err(CatalogError::Validation(format!(
                "Menu item price cannot be negative: {}",
                self.price
            )));
        }
        Ok(())
    }
}

impl From<NewMenuItem> for MenuItem {
    fn from(new_item: NewMenuItem) -> Self {
        Self {
            id: new_item.id.unwrap_or_default(),
            name: new_item.name,
            description: new_item.description,
            price: new_item.price,
            category: new_item.category,
            image: new_item.image,
            available: new_item.available,
            stock: new_item.stock,
            calories: new_item.calories,
        }
    }
}
