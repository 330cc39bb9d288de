//! Search commands.
//!
//! `text` drives the full session (submit path, including the simulated
//! delivery latency) so the CLI exercises the same machinery an
//! interactive surface would; `category` uses the index's immediate
//! path, as category clicks do.

use oud_eire_core::Product;
use oud_eire_storefront::search::session::{SearchSession, SearchView};
use oud_eire_storefront::search::{Category, SearchIndex};

use super::{CliError, load_config_and_catalog};

/// Run a text search through the search session.
pub async fn text(query: &str) -> Result<(), CliError> {
    if query.trim().is_empty() {
        render_no_query();
        return Ok(());
    }

    let (config, catalog) = load_config_and_catalog()?;
    let index = SearchIndex::new(catalog, &config.search);

    let session = SearchSession::spawn(index, &config.search);
    session.open();
    session.submit(query);

    let mut rx = session.subscribe();
    let snapshot = rx
        .wait_for(|s| matches!(s.view, SearchView::Results(_) | SearchView::Empty))
        .await
        .map_err(|_| CliError::SessionClosed)?
        .clone();

    match snapshot.view {
        SearchView::Results(results) => render(&results),
        _ => render_no_results(&snapshot.query),
    }
    Ok(())
}

/// Run a category search (immediate path, no session).
pub fn category(token: &str) -> Result<(), CliError> {
    let (config, catalog) = load_config_and_catalog()?;
    let index = SearchIndex::new(catalog, &config.search);

    let results = index.search_by_category(Category::parse(token));
    if results.is_empty() {
        render_no_results(token);
    } else {
        render(&results);
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn render(results: &[Product]) {
    let plural = if results.len() == 1 { "" } else { "s" };
    println!("{} product{plural} found", results.len());
    for product in results {
        let badge = product
            .badge
            .map(|b| format!(" [{b}]"))
            .unwrap_or_default();
        println!("  {:<32} €{}{badge}", product.name, product.price);
        println!("    {}", product.description);
    }
}

#[allow(clippy::print_stdout)]
fn render_no_results(query: &str) {
    println!("No results found for \"{query}\"");
    println!("Try different keywords or browse our categories");
}

#[allow(clippy::print_stdout)]
fn render_no_query() {
    println!("Nothing to search for");
}
