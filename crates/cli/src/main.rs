//! Oud Éire CLI - Storefront driver for the cart and search core.
//!
//! # Usage
//!
//! ```bash
//! # List the bundled catalog
//! oe-cli catalog list
//!
//! # Add a product to the cart (by exact name), then inspect it
//! oe-cli cart add "Yara - Lataffa"
//! oe-cli cart show
//!
//! # Change a line item's quantity, or remove it
//! oe-cli cart update <line-item-id> -- -1
//! oe-cli cart remove <line-item-id>
//!
//! # Search the catalog
//! oe-cli search text "oud"
//! oe-cli search category bestsellers
//! ```
//!
//! # Environment Variables
//!
//! - `OUD_EIRE_DATA_DIR` - Directory for the persisted cart
//!   (default: `.oud-eire`)
//! - Search/cart tunables as documented in the storefront `config` module

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use oud_eire_core::LineItemId;

mod commands;

#[derive(Parser)]
#[command(name = "oe-cli")]
#[command(author, version, about = "Oud Éire storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and mutate the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Search the product catalog
    Search {
        #[command(subcommand)]
        action: SearchAction,
    },
    /// Inspect the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a product, by exact catalog name
    Add {
        /// Product display name (e.g. "Yara - Lataffa")
        name: String,
    },
    /// Remove a line item
    Remove {
        /// Line item id (shown by `cart show`)
        id: LineItemId,
    },
    /// Add a delta (positive or negative) to a line item's quantity
    Update {
        /// Line item id (shown by `cart show`)
        id: LineItemId,

        /// Quantity change; reaching zero removes the line item
        #[arg(allow_hyphen_values = true)]
        delta: i32,
    },
    /// Show the cart's line items, count, and subtotal
    Show,
}

#[derive(Subcommand)]
enum SearchAction {
    /// Substring search over name, description, and badge
    Text {
        /// Query text
        query: String,
    },
    /// Category search (`bestsellers`, `new`, `premium`; anything else
    /// lists the whole catalog)
    Category {
        /// Category token
        token: String,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List all products in catalog order
    List,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add { name } => commands::cart::add(&name)?,
            CartAction::Remove { id } => commands::cart::remove(id)?,
            CartAction::Update { id, delta } => commands::cart::update(id, delta)?,
            CartAction::Show => commands::cart::show()?,
        },
        Commands::Search { action } => match action {
            SearchAction::Text { query } => commands::search::text(&query).await?,
            SearchAction::Category { token } => commands::search::category(&token)?,
        },
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list()?,
        },
    }
    Ok(())
}
