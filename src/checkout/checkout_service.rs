use chrono::Utc;
use log::debug;
use uuid::Uuid;

use super::checkout_errors::{CheckoutError, Result};
use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::constants::MONEY_DECIMAL_PRECISION;
use crate::orders::{Order, OrderHistory, OrderStatus};
use crate::wallet::Wallet;

/// Result of a committed checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOutcome {
    pub order: Order,
    pub message: String,
}

/// Runs the checkout transaction over the given cart, catalog, wallet and
/// order history.
///
/// Validation happens in two passes: an affordability guard against the
/// wallet, then a fresh per-line stock check against the catalog, since both
/// can have changed between cart population and checkout. The affordability
/// guard deliberately runs first, so a cart that is simultaneously
/// unaffordable and understocked reports insufficient funds.
///
/// Once both passes succeed the commit is applied as a unit: stock
/// decrement, wallet debit, order record, cart clear. Callers provide
/// atomicity by invoking this inside their own critical section; no partial
/// state is ever left behind because every failure path returns before the
/// first mutation.
pub fn process_checkout(
    cart: &mut Cart,
    catalog: &mut Catalog,
    wallet: &mut Wallet,
    history: &mut OrderHistory,
) -> Result<CheckoutOutcome> {
    let total = cart.total().round_dp(MONEY_DECIMAL_PRECISION);

    if !wallet.can_afford(total) {
        return Err(CheckoutError::InsufficientFunds {
            total,
            balance: wallet.balance,
        });
    }

    // Re-validate stock against the live catalog before touching anything.
    for line in cart.lines() {
        let Some(item) = catalog.get(&line.id) else {
            return Err(CheckoutError::MissingItem {
                name: line.name.clone(),
            });
        };
        if item.stock < line.quantity {
            return Err(CheckoutError::InsufficientStock {
                name: line.name.clone(),
                available: item.stock,
            });
        }
    }

    // Commit. From here on nothing can fail.
    let items = cart.lines().to_vec();
    for line in &items {
        catalog.decrement_stock(&line.id, line.quantity);
    }

    wallet.debit(total, format!("Order Payment ({} items)", items.len()));

    let order = Order {
        id: Uuid::new_v4().to_string(),
        items,
        total,
        date: Utc::now(),
        status: OrderStatus::Completed,
    };
    history.record(order.clone());
    cart.clear();

    debug!("Checkout committed: order {} total {}", order.id, total);

    Ok(CheckoutOutcome {
        order,
        message: "Payment successful!".to_string(),
    })
}
