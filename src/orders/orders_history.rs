use rust_decimal::Decimal;

use super::orders_model::Order;

/// Append-only log of completed orders, most recent first.
#[derive(Debug, Clone, Default)]
pub struct OrderHistory {
    orders: Vec<Order>,
}

impl OrderHistory {
    /// Creates a history from an existing order list (e.g. a restored blob).
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Prepends a completed order.
    pub fn record(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    /// Full history, most recent first.
    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    /// Sum of all order totals. Pure aggregate for reporting.
    pub fn revenue_total(&self) -> Decimal {
        self.orders.iter().map(|o| o.total).sum()
    }

    /// Number of recorded orders.
    pub fn count(&self) -> usize {
        self.orders.len()
    }
}
