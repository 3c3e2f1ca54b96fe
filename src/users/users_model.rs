use serde::{Deserialize, Serialize};

use crate::wallet::Wallet;

/// Demo role. Toggling between the two is a demo affordance, not an
/// authorization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    /// Returns the other role.
    pub fn toggled(&self) -> Role {
        match self {
            Role::Admin => Role::Customer,
            Role::Customer => Role::Admin,
        }
    }
}

/// The single local user, owner of the wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub wallet: Wallet,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
