// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;

use crate::web_app::model::Catalog;

#[cfg(feature = "ssr")]
fn catalog_client() -> Result<crate::web_app::api::catalog::CatalogClient, ServerFnError> {
    use crate::web_app::api::catalog;

    // First try the context (for testing or if manually set)
    if let Some(client) = use_context::<catalog::CatalogClient>() {
        return Ok(client);
    }

    // Fall back to the global handle set up by the server binary
    if let Some(client) = catalog::client() {
        return Ok(client);
    }

    Err(ServerFnError::new("Catalog client not available"))
}

/// Load the product and category lists from the catalog service.
///
/// Both requests are issued together and the caller sees a single loading
/// state until the pair resolves or either fails. Each product gets its
/// synthetic added-date here, once, so date filtering stays deterministic
/// for the rest of the session.
#[server(LoadCatalog, "/api")]
pub async fn load_catalog() -> Result<Catalog, ServerFnError> {
    use crate::web_app::model::assign_added_dates;

    let client = catalog_client()?;
    tracing::info!("Catalog load request: base_url='{}'", client.base_url());

    let (records, categories) =
        match tokio::try_join!(client.fetch_products(), client.fetch_categories()) {
            Ok(pair) => pair,
            Err(e) => {
                tracing::error!("Catalog load failed: {}", e);
                return Err(ServerFnError::new(format!("Catalog load failed: {}", e)));
            }
        };

    let today = chrono::Local::now().date_naive();
    let products = assign_added_dates(records, today);

    tracing::info!(
        "Catalog loaded: {} products, {} categories",
        products.len(),
        categories.len()
    );

    Ok(Catalog {
        products,
        categories,
    })
}
