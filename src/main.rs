//! Application entry point: brings the inventory store up and verifies it.
//!
//! The desktop front end owns the event loop and calls into
//! [`artstock::store`] for everything; this binary performs the shared
//! bootstrap (tracing, environment, database, seed) and reports the catalog
//! state it hands over.

use artstock::config::database::init_store;
use artstock::errors::Result;
use artstock::store;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Connect, ensure schema, seed the demo catalog on first run
    let db = init_store().await?;
    info!("Inventory store initialized.");

    // 4. Report what the front end will find
    let products = store::product::list_products(&db, None).await?;
    let categories = store::category::list_categories(&db).await?;
    info!(
        products = products.len(),
        categories = categories.len(),
        "Catalog ready."
    );

    Ok(())
}
