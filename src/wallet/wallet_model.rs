use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ledger entry kind. Serialized with the SCREAMING spellings used by the
/// persisted blobs ("DEPOSIT", "PAYMENT", "REFUND").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Deposit,
    Payment,
    Refund,
}

/// An immutable ledger entry. Amounts are signed: positive for deposits,
/// negative for payments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub description: String,
}

/// A wallet: current balance plus its transaction log, most recent first.
///
/// Invariant: balance equals the initial balance plus the sum of all logged
/// transaction amounts. It is maintained incrementally by the ledger
/// operations, never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub balance: Decimal,
    pub transactions: Vec<Transaction>,
}
