use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, warn};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cart::{Cart, CartError, CartLine};
use crate::catalog::{Catalog, Category, MenuItem, NewMenuItem};
use crate::checkout::{process_checkout, CheckoutOutcome};
use crate::constants::{MENU_STORE_KEY, ORDERS_STORE_KEY, USER_STORE_KEY};
use crate::errors::Result;
use crate::orders::{Order, OrderHistory};
use crate::persist::SnapshotStore;
use crate::recommend::{filter_known_names, Recommendation, Recommender};
use crate::users::{seed_user, Role, User};

/// All in-memory state: the user with their wallet, the catalog, the
/// session cart and the order history.
struct CafeState {
    user: User,
    catalog: Catalog,
    cart: Cart,
    orders: OrderHistory,
}

/// The state owner. Every mutation from the ordering flows funnels through
/// a method here: the method takes the single write lock, applies the
/// entity operation, and mirrors the affected blobs to the snapshot store.
///
/// Holding one lock across the whole checkout makes the commit a critical
/// section covering the wallet and every catalog item, so two concurrent
/// checkouts cannot both pass the stock check on the last unit.
///
/// Persistence is best-effort and outside the transactional boundary:
/// a failed mirror write is logged and never fails the operation.
pub struct CafeStore {
    state: RwLock<CafeState>,
    snapshots: Arc<dyn SnapshotStore>,
}

impl CafeStore {
    /// Builds the store, restoring state from the snapshot blobs. A missing
    /// or unparseable blob falls back to the seed defaults.
    pub fn new(snapshots: Arc<dyn SnapshotStore>) -> Self {
        let user = load_blob::<User>(snapshots.as_ref(), USER_STORE_KEY).unwrap_or_else(seed_user);
        let catalog = load_blob::<Vec<MenuItem>>(snapshots.as_ref(), MENU_STORE_KEY)
            .map(Catalog::new)
            .unwrap_or_else(Catalog::seeded);
        let orders = load_blob::<Vec<Order>>(snapshots.as_ref(), ORDERS_STORE_KEY)
            .map(OrderHistory::new)
            .unwrap_or_default();

        debug!(
            "Store ready: {} menu items, {} past orders, balance {}",
            catalog.list().len(),
            orders.count(),
            user.wallet.balance
        );

        Self {
            state: RwLock::new(CafeState {
                user,
                catalog,
                cart: Cart::new(),
                orders,
            }),
            snapshots,
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn user(&self) -> User {
        self.read().user.clone()
    }

    pub fn is_admin(&self) -> bool {
        self.read().user.is_admin()
    }

    pub fn wallet_balance(&self) -> Decimal {
        self.read().user.wallet.balance
    }

    pub fn menu(&self) -> Vec<MenuItem> {
        self.read().catalog.list().to_vec()
    }

    pub fn menu_item(&self, id: &str) -> Option<MenuItem> {
        self.read().catalog.get(id).cloned()
    }

    pub fn menu_by_category(&self, category: Category) -> Vec<MenuItem> {
        self.read()
            .catalog
            .by_category(category)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn search_menu(&self, query: &str) -> Vec<MenuItem> {
        self.read()
            .catalog
            .search(query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn cart_lines(&self) -> Vec<CartLine> {
        self.read().cart.lines().to_vec()
    }

    pub fn cart_total(&self) -> Decimal {
        self.read().cart.total()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.read().orders.list().to_vec()
    }

    pub fn order_count(&self) -> usize {
        self.read().orders.count()
    }

    pub fn revenue_total(&self) -> Decimal {
        self.read().orders.revenue_total()
    }

    // ------------------------------------------------------------------
    // User & wallet
    // ------------------------------------------------------------------

    /// Switches the user between Customer and Admin. Demo affordance only.
    pub fn toggle_role(&self) -> Role {
        let mut state = self.write();
        state.user.role = state.user.role.toggled();
        let role = state.user.role;
        self.mirror(USER_STORE_KEY, &state.user);
        role
    }

    /// Deposits into the wallet ("top-up").
    pub fn top_up(&self, amount: Decimal) -> Result<()> {
        let mut state = self.write();
        state.user.wallet.deposit(amount, "Wallet Top-up")?;
        self.mirror(USER_STORE_KEY, &state.user);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Cart
    // ------------------------------------------------------------------

    /// Adds one unit of the given menu item to the cart.
    pub fn add_to_cart(&self, item_id: &str) -> Result<()> {
        let mut state = self.write();
        let item = state
            .catalog
            .get(item_id)
            .cloned()
            .ok_or_else(|| CartError::UnknownItem {
                id: item_id.to_string(),
            })?;
        state.cart.add(&item)?;
        Ok(())
    }

    pub fn remove_from_cart(&self, item_id: &str) {
        self.write().cart.remove(item_id);
    }

    /// Sets a cart line's quantity, capped at the item's current stock.
    pub fn set_cart_quantity(&self, item_id: &str, quantity: u32) -> Result<()> {
        let mut state = self.write();
        let available = state.catalog.get(item_id).map(|i| i.stock);
        state.cart.set_quantity(item_id, quantity, available)?;
        Ok(())
    }

    pub fn clear_cart(&self) {
        self.write().cart.clear();
    }

    // ------------------------------------------------------------------
    // Checkout
    // ------------------------------------------------------------------

    /// Runs the checkout transaction under the state write lock.
    ///
    /// On success the user, menu and orders blobs are mirrored; on decline
    /// nothing has changed and nothing is written.
    pub fn checkout(&self) -> Result<CheckoutOutcome> {
        let mut state = self.write();
        let CafeState {
            user,
            catalog,
            cart,
            orders,
        } = &mut *state;

        let outcome = process_checkout(cart, catalog, &mut user.wallet, orders)?;

        self.mirror(USER_STORE_KEY, &state.user);
        self.mirror(MENU_STORE_KEY, &state.catalog.list());
        self.mirror(ORDERS_STORE_KEY, &state.orders.list());
        Ok(outcome)
    }

    // ------------------------------------------------------------------
    // Admin catalog operations
    // ------------------------------------------------------------------

    pub fn add_menu_item(&self, new_item: NewMenuItem) -> Result<MenuItem> {
        let mut state = self.write();
        let created = state.catalog.create(new_item)?;
        self.mirror(MENU_STORE_KEY, &state.catalog.list());
        Ok(created)
    }

    pub fn update_menu_item(&self, item: MenuItem) {
        let mut state = self.write();
        state.catalog.update(item);
        self.mirror(MENU_STORE_KEY, &state.catalog.list());
    }

    pub fn delete_menu_item(&self, id: &str) {
        let mut state = self.write();
        state.catalog.delete(id);
        self.mirror(MENU_STORE_KEY, &state.catalog.list());
    }

    // ------------------------------------------------------------------
    // Recommendations
    // ------------------------------------------------------------------

    /// Asks the collaborator for suggestions against a menu snapshot taken
    /// outside the lock. Advisory only; acting on a suggestion still goes
    /// through [`add_to_cart`](Self::add_to_cart).
    pub async fn recommend(&self, recommender: &dyn Recommender, mood: &str) -> Recommendation {
        let menu = self.menu();
        recommender.recommend(mood, &menu).await
    }

    /// Drops suggested names that no longer match a catalog item name.
    pub fn filter_suggestions(&self, names: &[String]) -> Vec<String> {
        let state = self.read();
        filter_known_names(names, state.catalog.list())
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn read(&self) -> RwLockReadGuard<'_, CafeState> {
        // A poisoned lock can only mean a panic in a reader clone; recover
        // with the last-known state rather than propagating the panic.
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, CafeState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    fn mirror<T: Serialize>(&self, key: &str, value: &T) {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Skipping snapshot of '{key}': serialization failed: {e}");
                return;
            }
        };
        if let Err(e) = self.snapshots.write(key, &payload) {
            warn!("Snapshot write for '{key}' failed (state kept in memory): {e}");
        }
    }
}

fn load_blob<T: DeserializeOwned>(snapshots: &dyn SnapshotStore, key: &str) -> Option<T> {
    let raw = snapshots.read(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Discarding unparseable snapshot '{key}': {e}");
            None
        }
    }
}
