//! Cart commands.
//!
//! The cart persists between invocations through the file-backed store,
//! the CLI's stand-in for browser local storage: each command
//! rehydrates the cart, applies one mutation, and lets the store's
//! write-after-mutation discipline persist the result.

use oud_eire_core::LineItemId;
use oud_eire_storefront::cart::{CartSnapshot, CartStore};
use oud_eire_storefront::error::AppError;
use oud_eire_storefront::storage::FileStore;

use super::{CliError, data_dir, load_config_and_catalog};

/// Add one unit of the named product to the cart.
pub fn add(name: &str) -> Result<(), CliError> {
    let (config, catalog) = load_config_and_catalog()?;
    let Some(product) = catalog.find_by_name(name) else {
        return Err(CliError::UnknownProduct(name.to_string()));
    };

    let mut cart = open_cart(&config.cart.storage_key)?;
    cart.add(product);
    render(&snapshot_of(&cart));
    Ok(())
}

/// Remove a line item; a missing id is a no-op.
pub fn remove(id: LineItemId) -> Result<(), CliError> {
    let (config, _) = load_config_and_catalog()?;
    let mut cart = open_cart(&config.cart.storage_key)?;
    cart.remove(id);
    render(&snapshot_of(&cart));
    Ok(())
}

/// Apply a quantity delta; reaching zero removes the line item.
pub fn update(id: LineItemId, delta: i32) -> Result<(), CliError> {
    let (config, _) = load_config_and_catalog()?;
    let mut cart = open_cart(&config.cart.storage_key)?;
    cart.update_quantity(id, delta);
    render(&snapshot_of(&cart));
    Ok(())
}

/// Show the cart contents.
pub fn show() -> Result<(), CliError> {
    let (config, _) = load_config_and_catalog()?;
    let cart = open_cart(&config.cart.storage_key)?;
    render(&snapshot_of(&cart));
    Ok(())
}

fn open_cart(storage_key: &str) -> Result<CartStore<FileStore>, CliError> {
    let store = FileStore::open(data_dir()).map_err(AppError::from)?;
    Ok(CartStore::new(store, storage_key))
}

fn snapshot_of(cart: &CartStore<FileStore>) -> CartSnapshot {
    cart.subscribe().borrow().clone()
}

#[allow(clippy::print_stdout)]
fn render(snapshot: &CartSnapshot) {
    if snapshot.is_empty() {
        println!("Cart is empty");
        return;
    }
    for item in &snapshot.items {
        println!(
            "{}  {:<32} x{:<3} @ €{}  = €{}",
            item.id,
            item.name,
            item.quantity,
            item.price,
            item.line_total()
        );
    }
    println!("Items: {}", snapshot.count);
    println!("Subtotal: €{}", snapshot.subtotal);
}
