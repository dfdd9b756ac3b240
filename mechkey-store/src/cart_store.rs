//! Shopping cart store.
//!
//! Holds the cart line items, persists them after every mutation, and
//! notifies subscribers when anything changes.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mechkey_core::{CartLineItem, KeyValueStorage, Product, format_idr, keys, load_json, save_json};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::outcome::ActionOutcome;

const NOT_FOUND: &str = "Item not found in cart";

fn max_stock_message(ceiling: u32) -> String {
    format!("Maximum stock ({ceiling}) reached")
}

// ============================================================================
// Inner State
// ============================================================================

#[derive(Debug, Default)]
struct CartState {
    items: Vec<CartLineItem>,
    is_cart_open: bool,
}

impl CartState {
    fn find_mut(&mut self, product_id: u64) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|item| item.id == product_id)
    }

    fn position(&self, product_id: u64) -> Option<usize> {
        self.items.iter().position(|item| item.id == product_id)
    }
}

// ============================================================================
// Cart Store
// ============================================================================

/// The shopping cart.
///
/// Line items are kept in insertion order, one per product. Every mutation
/// is written to the `mechkey_cart` storage key; write failures are logged
/// and do not roll back the in-memory state.
pub struct CartStore {
    state: RwLock<CartState>,
    storage: Arc<dyn KeyValueStorage>,
    notify: watch::Sender<u64>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("CartStore")
            .field("items", &state.items.len())
            .field("is_cart_open", &state.is_cart_open)
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Creates a cart hydrated from `storage`.
    ///
    /// Malformed persisted data is logged and replaced by an empty cart.
    /// Lines that break the cart invariants are repaired or dropped.
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        let items = match load_json::<Vec<CartLineItem>, _>(storage.as_ref(), keys::CART) {
            Ok(Some(items)) => {
                debug!(count = items.len(), "Cart loaded from storage");
                normalize(items)
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                error!(error = %e, "Error loading cart from storage");
                Vec::new()
            }
        };

        let (notify, _) = watch::channel(0);
        Self {
            state: RwLock::new(CartState {
                items,
                is_cart_open: false,
            }),
            storage,
            notify,
        }
    }

    /// Subscribes to cart changes.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.notify.subscribe()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Adds `quantity` of `product` to the cart.
    ///
    /// A product already in the cart has its quantity increased. Whenever
    /// the resulting quantity exceeds the product's stock, it is clamped to
    /// the stock and a failure is returned; the clamped line is kept, so the
    /// failure is informational rather than "nothing changed". A zero
    /// quantity is treated as one.
    pub fn add_item(&self, product: &Product, quantity: u32) -> ActionOutcome {
        let quantity = quantity.max(1);
        let ceiling = product.stock_ceiling();
        let clamp = |wanted: u32| match ceiling {
            Some(max) if wanted > max => (max, true),
            _ => (wanted, false),
        };

        let mut state = self.write();
        let clamped = if let Some(item) = state.find_mut(product.id) {
            let (next, clamped) = clamp(item.quantity.saturating_add(quantity));
            item.quantity = next;
            clamped
        } else {
            let (first, clamped) = clamp(quantity);
            state.items.push(CartLineItem::from_product(product, first));
            clamped
        };
        self.commit(state);

        if let (true, Some(max)) = (clamped, ceiling) {
            info!(product_id = product.id, ceiling = max, "Cart quantity clamped to stock");
            return ActionOutcome::fail(max_stock_message(max));
        }

        info!(product_id = product.id, quantity, "Added to cart");
        ActionOutcome::ok(format!("{} added to cart", product.name))
    }

    /// Removes the line item for `product_id`.
    pub fn remove_item(&self, product_id: u64) -> ActionOutcome {
        let mut state = self.write();
        let Some(index) = state.position(product_id) else {
            return ActionOutcome::fail(NOT_FOUND);
        };
        let item = state.items.remove(index);
        self.commit(state);

        info!(product_id, "Removed from cart");
        ActionOutcome::ok(format!("{} removed from cart", item.name))
    }

    /// Sets the quantity for `product_id`.
    ///
    /// Zero or less removes the item; more than the stock is clamped to it.
    /// Does nothing if the item is not in the cart.
    pub fn update_quantity(&self, product_id: u64, quantity: i64) {
        let mut state = self.write();
        let Some(index) = state.position(product_id) else {
            return;
        };

        if quantity <= 0 {
            state.items.remove(index);
            self.commit(state);
            info!(product_id, "Removed from cart");
            return;
        }

        let requested = u32::try_from(quantity).unwrap_or(u32::MAX);
        let item = &mut state.items[index];
        item.quantity = match item.stock_ceiling() {
            Some(ceiling) => requested.min(ceiling),
            None => requested,
        };
        self.commit(state);
        debug!(product_id, quantity = requested, "Cart quantity updated");
    }

    /// Adds one to the quantity of `product_id`, unless already at stock.
    pub fn increment_quantity(&self, product_id: u64) -> ActionOutcome {
        let mut state = self.write();
        let Some(item) = state.find_mut(product_id) else {
            return ActionOutcome::fail(NOT_FOUND);
        };
        if item.is_at_ceiling() {
            let ceiling = item.stock_ceiling().unwrap_or(item.quantity);
            return ActionOutcome::fail(max_stock_message(ceiling));
        }
        item.quantity = item.quantity.saturating_add(1);
        self.commit(state);
        ActionOutcome::done()
    }

    /// Takes one off the quantity of `product_id`, removing the item at one.
    pub fn decrement_quantity(&self, product_id: u64) {
        let mut state = self.write();
        let Some(index) = state.position(product_id) else {
            return;
        };

        if state.items[index].quantity <= 1 {
            state.items.remove(index);
            info!(product_id, "Removed from cart");
        } else {
            state.items[index].quantity -= 1;
        }
        self.commit(state);
    }

    /// Empties the cart.
    pub fn clear_cart(&self) {
        let mut state = self.write();
        state.items.clear();
        self.commit(state);
        info!("Cart cleared");
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns a copy of the line items.
    pub fn items(&self) -> Vec<CartLineItem> {
        self.read().items.clone()
    }

    /// Returns true if `product_id` is in the cart.
    pub fn is_in_cart(&self, product_id: u64) -> bool {
        self.read().position(product_id).is_some()
    }

    /// Returns the quantity of `product_id`, or zero.
    pub fn get_item_quantity(&self, product_id: u64) -> u32 {
        self.read()
            .items
            .iter()
            .find(|item| item.id == product_id)
            .map_or(0, |item| item.quantity)
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> u64 {
        self.read()
            .items
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum()
    }

    /// Sum of price times quantity over all line items.
    pub fn total_price(&self) -> f64 {
        self.read().items.iter().map(CartLineItem::line_total).sum()
    }

    /// Total price formatted as rupiah.
    pub fn formatted_total(&self) -> String {
        format_idr(self.total_price())
    }

    // ========================================================================
    // Cart Panel
    // ========================================================================

    /// Returns true if the cart panel is open.
    pub fn is_cart_open(&self) -> bool {
        self.read().is_cart_open
    }

    /// Opens the cart panel.
    pub fn open_cart(&self) {
        self.set_open(true);
    }

    /// Closes the cart panel.
    pub fn close_cart(&self) {
        self.set_open(false);
    }

    /// Toggles the cart panel.
    pub fn toggle_cart(&self) {
        {
            let mut state = self.write();
            state.is_cart_open = !state.is_cart_open;
        }
        self.bump();
    }

    fn set_open(&self, open: bool) {
        self.write().is_cart_open = open;
        self.bump();
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn read(&self) -> RwLockReadGuard<'_, CartState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CartState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Persists the items, then releases the lock and notifies subscribers.
    ///
    /// Saving under the write guard keeps storage in mutation order.
    fn commit(&self, state: RwLockWriteGuard<'_, CartState>) {
        if let Err(e) = save_json(self.storage.as_ref(), keys::CART, &state.items) {
            error!(error = %e, "Error saving cart to storage");
        }
        drop(state);
        self.bump();
    }

    fn bump(&self) {
        self.notify.send_modify(|version| *version += 1);
    }
}

/// Drops zero-quantity and duplicate lines and clamps quantities to stock.
fn normalize(items: Vec<CartLineItem>) -> Vec<CartLineItem> {
    let mut kept: Vec<CartLineItem> = Vec::with_capacity(items.len());
    for mut item in items {
        if item.quantity == 0 {
            warn!(product_id = item.id, "Dropping stored cart line with zero quantity");
            continue;
        }
        if kept.iter().any(|k| k.id == item.id) {
            warn!(product_id = item.id, "Dropping duplicate stored cart line");
            continue;
        }
        if let Some(ceiling) = item.stock_ceiling().filter(|&c| item.quantity > c) {
            warn!(product_id = item.id, ceiling, "Clamping stored cart line to stock");
            item.quantity = ceiling;
        }
        kept.push(item);
    }
    kept
}
