//! Property-based tests for the ordering core.
//!
//! These verify the universal invariants across random operation
//! sequences, using the `proptest` crate for test case generation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use cafe_core::persist::MemorySnapshotStore;
use cafe_core::CafeStore;

// =============================================================================
// Generators
// =============================================================================

/// An operation against the store. Item ids are drawn from the seed menu
/// ("1".."6") plus one id that never exists.
#[derive(Debug, Clone)]
enum Op {
    AddToCart(String),
    RemoveFromCart(String),
    SetQuantity(String, u32),
    TopUpCents(i64),
    Checkout,
}

fn arb_item_id() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u8..=6).prop_map(|n| n.to_string()),
        Just("ghost".to_string()),
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arb_item_id().prop_map(Op::AddToCart),
        arb_item_id().prop_map(Op::RemoveFromCart),
        (arb_item_id(), 0u32..15).prop_map(|(id, q)| Op::SetQuantity(id, q)),
        // Includes zero and negative amounts, which must be declined.
        (-500i64..5000).prop_map(Op::TopUpCents),
        Just(Op::Checkout),
    ]
}

fn arb_ops(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(arb_op(), 0..=max_len)
}

fn apply(store: &CafeStore, op: &Op) {
    // Declines are part of the contract; only panics would be bugs.
    match op {
        Op::AddToCart(id) => {
            let _ = store.add_to_cart(id);
        }
        Op::RemoveFromCart(id) => store.remove_from_cart(id),
        Op::SetQuantity(id, q) => {
            let _ = store.set_cart_quantity(id, *q);
        }
        Op::TopUpCents(cents) => {
            let _ = store.top_up(Decimal::new(*cents, 2));
        }
        Op::Checkout => {
            let _ = store.checkout();
        }
    }
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The wallet balance always equals the sum of all ledger amounts, for
    /// every prefix of operations applied.
    #[test]
    fn prop_balance_equals_ledger_sum(ops in arb_ops(40)) {
        let store = CafeStore::new(Arc::new(MemorySnapshotStore::new()));

        for op in &ops {
            apply(&store, op);

            let wallet = store.user().wallet;
            let ledger_sum: Decimal = wallet.transactions.iter().map(|t| t.amount).sum();
            prop_assert_eq!(wallet.balance, ledger_sum);
        }
    }

    /// Stock is conserved: for every seed item, initial stock equals
    /// current stock plus the quantities sold across all recorded orders.
    /// Stock itself is unsigned, so it can never go negative.
    #[test]
    fn prop_stock_is_conserved(ops in arb_ops(40)) {
        let store = CafeStore::new(Arc::new(MemorySnapshotStore::new()));
        let initial: HashMap<String, u32> = store
            .menu()
            .iter()
            .map(|i| (i.id.clone(), i.stock))
            .collect();

        for op in &ops {
            apply(&store, op);
        }

        let mut sold: HashMap<String, u32> = HashMap::new();
        for order in store.orders() {
            for line in &order.items {
                *sold.entry(line.id.clone()).or_insert(0) += line.quantity;
            }
        }

        for item in store.menu() {
            let expected = initial[&item.id] - sold.get(&item.id).copied().unwrap_or(0);
            prop_assert_eq!(item.stock, expected);
        }
    }

    /// Cart quantities never exceed the current catalog stock while the
    /// item still exists.
    #[test]
    fn prop_cart_quantity_capped_by_stock(ops in arb_ops(40)) {
        let store = CafeStore::new(Arc::new(MemorySnapshotStore::new()));

        for op in &ops {
            apply(&store, op);

            for line in store.cart_lines() {
                if let Some(item) = store.menu_item(&line.id) {
                    prop_assert!(line.quantity <= item.stock,
                        "line {} quantity {} exceeds stock {}",
                        line.id, line.quantity, item.stock);
                }
            }
        }
    }

    /// Checkout is all-or-nothing: on decline, cart, catalog, wallet and
    /// order history are unchanged; on success, the cart is empty, the new
    /// order sits at the head of the history with the pre-checkout snapshot
    /// and total, and each item's stock dropped by exactly its quantity.
    #[test]
    fn prop_checkout_is_atomic(ops in arb_ops(25)) {
        let store = CafeStore::new(Arc::new(MemorySnapshotStore::new()));

        for op in &ops {
            apply(&store, op);
        }

        let cart_before = store.cart_lines();
        let total_before = store.cart_total();
        let menu_before = store.menu();
        let wallet_before = store.user().wallet;
        let orders_before = store.orders();

        match store.checkout() {
            Err(_) => {
                prop_assert_eq!(store.cart_lines(), cart_before);
                prop_assert_eq!(store.menu(), menu_before);
                prop_assert_eq!(store.user().wallet, wallet_before);
                prop_assert_eq!(store.orders(), orders_before);
            }
            Ok(outcome) => {
                prop_assert!(store.cart_lines().is_empty());
                prop_assert_eq!(outcome.order.items.clone(), cart_before.clone());
                prop_assert_eq!(outcome.order.total, total_before);
                prop_assert_eq!(store.order_count(), orders_before.len() + 1);
                prop_assert_eq!(&store.orders()[0], &outcome.order);

                // Wallet debited by exactly the total.
                prop_assert_eq!(store.user().wallet.balance, wallet_before.balance - total_before);

                // Stock decremented by exactly the carted quantities.
                let carted: HashMap<&str, u32> = cart_before
                    .iter()
                    .map(|l| (l.id.as_str(), l.quantity))
                    .collect();
                for item in menu_before {
                    let sold = carted.get(item.id.as_str()).copied().unwrap_or(0);
                    let now = store.menu_item(&item.id).unwrap();
                    prop_assert_eq!(now.stock, item.stock - sold);
                }
            }
        }
    }

    /// Checkout never succeeds when the cart total exceeds the balance.
    #[test]
    fn prop_checkout_never_exceeds_balance(ops in arb_ops(25)) {
        let store = CafeStore::new(Arc::new(MemorySnapshotStore::new()));

        for op in &ops {
            apply(&store, op);
        }

        let total = store.cart_total();
        let balance = store.user().wallet.balance;

        if total > balance {
            prop_assert!(store.checkout().is_err());
        }
    }
}
