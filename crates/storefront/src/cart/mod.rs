//! Shopping cart store.
//!
//! `CartStore` owns the authoritative in-memory cart and keeps it
//! mirrored to a [`KeyValueStore`]: rehydrated once at construction,
//! overwritten wholesale after every mutation. Durability is
//! best-effort - a failed write is logged and swallowed, the in-memory
//! state stays authoritative for the rest of the session.
//!
//! Mutations publish a [`CartSnapshot`] on a watch channel; the
//! presentation collaborator subscribes and renders the derived count,
//! subtotal, and line items. Nothing here touches a UI.
//!
//! Deduplication is by exact, case-sensitive product name, while line
//! items carry their own generated id. Two distinct catalog products
//! sharing a display name would merge into one line item; this mirrors
//! the storefront's historical behavior and is kept as-is.

use tokio::sync::watch;
use tracing::{debug, warn};

use oud_eire_core::{CartLineItem, LineItemId, Price, Product};

use crate::storage::KeyValueStore;

/// A point-in-time, render-ready view of the cart.
///
/// The items vector is a defensive copy in insertion order; mutating it
/// does not affect the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartSnapshot {
    /// Line items in insertion order.
    pub items: Vec<CartLineItem>,
    /// Sum of all quantities (not the number of distinct line items).
    pub count: u32,
    /// Sum of `price x quantity` over all line items.
    pub subtotal: Price,
}

impl CartSnapshot {
    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The authoritative cart state, mirrored to durable storage.
pub struct CartStore<S: KeyValueStore> {
    items: Vec<CartLineItem>,
    storage: S,
    storage_key: String,
    snapshot_tx: watch::Sender<CartSnapshot>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a cart store, rehydrating state from `storage`.
    ///
    /// An absent, empty, or malformed persisted value falls back to an
    /// empty cart; corruption is logged, never raised.
    pub fn new(storage: S, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let items = load_items(&storage, &storage_key);
        let (snapshot_tx, _) = watch::channel(snapshot_of(&items));
        Self {
            items,
            storage,
            storage_key,
            snapshot_tx,
        }
    }

    /// Subscribe to cart snapshots.
    ///
    /// The receiver always holds the latest snapshot; a new value is
    /// published after every mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Add one unit of a product to the cart.
    ///
    /// If a line item with the same name already exists its quantity is
    /// incremented; otherwise a new line item with a fresh id and
    /// quantity 1 is appended. Always succeeds.
    pub fn add(&mut self, product: &Product) {
        match self.items.iter_mut().find(|item| item.name == product.name) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                debug!(name = %product.name, quantity = item.quantity, "Incremented cart line");
            }
            None => {
                self.items.push(CartLineItem::from_product(product));
                debug!(name = %product.name, "Added cart line");
            }
        }
        self.commit();
    }

    /// Remove the line item with the given id.
    ///
    /// A missing id is a no-op, not an error (safe against double
    /// clicks and racing UI events).
    pub fn remove(&mut self, id: LineItemId) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            debug!(%id, "Remove ignored: no such line item");
            return;
        }
        self.commit();
    }

    /// Add `delta` (positive or negative) to a line item's quantity.
    ///
    /// A resulting quantity of zero or below removes the line item
    /// entirely. A missing id is a no-op.
    pub fn update_quantity(&mut self, id: LineItemId, delta: i32) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!(%id, "Quantity update ignored: no such line item");
            return;
        };
        let updated = i64::from(item.quantity) + i64::from(delta);
        if updated <= 0 {
            self.items.retain(|item| item.id != id);
            debug!(%id, "Quantity reached zero, line item removed");
        } else {
            // updated is in (0, u32::MAX + i32::MAX], clamp the far end
            item.quantity = u32::try_from(updated).unwrap_or(u32::MAX);
        }
        self.commit();
    }

    /// Sum of all line item quantities.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of `price x quantity` over all line items.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// The line items in insertion order, as a defensive copy.
    #[must_use]
    pub fn items(&self) -> Vec<CartLineItem> {
        self.items.clone()
    }

    /// Re-read state from the persistent store, replacing the in-memory
    /// cart. Corrupt or absent data yields an empty cart.
    pub fn load(&mut self) {
        self.items = load_items(&self.storage, &self.storage_key);
        self.publish();
    }

    /// Persist and notify. Called after every mutation.
    fn commit(&mut self) {
        self.persist();
        self.publish();
    }

    /// Serialize the full line-item collection to the durable store.
    ///
    /// Best-effort: the in-memory mutation has already succeeded, so a
    /// write failure is logged and swallowed rather than rolled back.
    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.items) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to serialize cart; skipping persist");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.storage_key, &json) {
            warn!(error = %e, key = %self.storage_key, "Failed to persist cart; in-memory state remains authoritative");
        }
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(snapshot_of(&self.items));
    }
}

fn snapshot_of(items: &[CartLineItem]) -> CartSnapshot {
    CartSnapshot {
        items: items.to_vec(),
        count: items.iter().map(|item| item.quantity).sum(),
        subtotal: items.iter().map(CartLineItem::line_total).sum(),
    }
}

/// Rehydrate line items from storage, treating corrupt data as absent.
fn load_items<S: KeyValueStore>(storage: &S, key: &str) -> Vec<CartLineItem> {
    let value = match storage.get(key) {
        Ok(Some(value)) => value,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, key = %key, "Failed to read persisted cart; starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<CartLineItem>>(&value) {
        Ok(items) => {
            debug!(count = items.len(), "Rehydrated cart from storage");
            items
        }
        Err(e) => {
            warn!(error = %e, key = %key, "Persisted cart is malformed; starting empty");
            Vec::new()
        }
    }
}
