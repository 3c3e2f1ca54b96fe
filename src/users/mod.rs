//! Users module - the demo user, role toggle, and seed data.

mod users_constants;
mod users_model;

// Re-export the public interface
pub use users_constants::seed_user;
pub use users_model::{Role, User};
