use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;

/// Order status. Only `Completed` is produced by the current flows; the
/// other variants exist for blob compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

/// A completed checkout: an immutable copy of the cart lines at time of
/// purchase, the total charged, and the timestamp. Never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub items: Vec<CartLine>,
    pub total: Decimal,
    pub date: DateTime<Utc>,
    pub status: OrderStatus,
}
