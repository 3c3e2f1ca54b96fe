use rust_decimal::Decimal;

use super::cart_errors::{CartError, Result};
use super::cart_model::CartLine;
use crate::catalog::MenuItem;

/// The in-progress, unpersisted selection of items a user intends to
/// purchase. Lines are keyed by menu item id and kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of the given catalog item.
    ///
    /// Declines when the item is sold out, or when the existing line already
    /// sits at the item's current stock cap.
    pub fn add(&mut self, item: &MenuItem) -> Result<()> {
        if item.stock == 0 {
            return Err(CartError::SoldOut {
                name: item.name.clone(),
            });
        }

        match self.lines.iter_mut().find(|l| l.id == item.id) {
            Some(line) => {
                if line.quantity >= item.stock {
                    return Err(CartError::StockLimitReached {
                        name: item.name.clone(),
                        available: item.stock,
                    });
                }
                line.quantity += 1;
            }
            None => self.lines.push(CartLine::from_item(item, 1)),
        }
        Ok(())
    }

    /// Deletes the line for the given item id. Absent ids are fine.
    pub fn remove(&mut self, item_id: &str) {
        self.lines.retain(|l| l.id != item_id);
    }

    /// Sets a line's quantity exactly.
    ///
    /// Quantity zero removes the line. `available` is the item's current
    /// catalog stock; `None` means the item is gone from the catalog, in
    /// which case the cap check is skipped (the stale line is caught by the
    /// checkout re-validation instead). Setting a quantity above the cap is
    /// declined. An absent line is a no-op.
    pub fn set_quantity(
        &mut self,
        item_id: &str,
        quantity: u32,
        available: Option<u32>,
    ) -> Result<()> {
        if quantity == 0 {
            self.remove(item_id);
            return Ok(());
        }

        let Some(line) = self.lines.iter_mut().find(|l| l.id == item_id) else {
            return Ok(());
        };

        if let Some(available) = available {
            if quantity > available {
                return Err(CartError::InsufficientStock {
                    name: line.name.clone(),
                    available,
                });
            }
        }

        line.quantity = quantity;
        Ok(())
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum over lines of unit price times quantity. Pure.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, item_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == item_id)
    }

    /// Number of distinct lines in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
