use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::wallet_errors::{Result, WalletError};
use super::wallet_model::{Transaction, TransactionType, Wallet};

impl Wallet {
    /// Creates an empty wallet with a zero balance.
    pub fn new() -> Self {
        Self {
            balance: Decimal::ZERO,
            transactions: Vec::new(),
        }
    }

    /// Appends a Deposit transaction and increases the balance.
    ///
    /// The amount must be strictly positive; anything else is declined
    /// without touching the ledger.
    pub fn deposit(&mut self, amount: Decimal, description: impl Into<String>) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(WalletError::NonPositiveAmount(amount));
        }

        self.prepend(TransactionType::Deposit, amount, description.into());
        self.balance += amount;
        Ok(())
    }

    /// Appends a Payment transaction with the amount negated and decreases
    /// the balance.
    ///
    /// Internal primitive: only the checkout transaction calls this, after
    /// it has verified affordability.
    pub(crate) fn debit(&mut self, amount: Decimal, description: String) {
        self.prepend(TransactionType::Payment, -amount, description);
        self.balance -= amount;
    }

    /// Pure predicate: can this wallet cover `amount`?
    pub fn can_afford(&self, amount: Decimal) -> bool {
        self.balance >= amount
    }

    fn prepend(&mut self, kind: TransactionType, amount: Decimal, description: String) {
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            kind,
            amount,
            date: Utc::now(),
            description,
        };
        self.transactions.insert(0, transaction);
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}
