//! Catalog commands.

use super::{CliError, load_config_and_catalog};

/// List all products in catalog order.
#[allow(clippy::print_stdout)]
pub fn list() -> Result<(), CliError> {
    let (_, catalog) = load_config_and_catalog()?;
    for product in catalog.products() {
        let badge = product
            .badge
            .map(|b| format!(" [{b}]"))
            .unwrap_or_default();
        println!("{}  {:<32} €{}{badge}", product.id, product.name, product.price);
    }
    Ok(())
}
