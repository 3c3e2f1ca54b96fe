use rust_decimal_macros::dec;

use super::users_model::{Role, User};
use crate::wallet::Wallet;

/// Returns the seed user used when no user blob is present at startup:
/// a customer with a single opening deposit of 50.00.
pub fn seed_user() -> User {
    let mut wallet = Wallet::new();
    // The opening deposit cannot fail: the amount is positive.
    let _ = wallet.deposit(dec!(50.00), "Initial Deposit");

    User {
        id: "user_123".to_string(),
        name: "Alex Doe".to_string(),
        email: "alex@example.com".to_string(),
        role: Role::Customer,
        wallet,
    }
}
