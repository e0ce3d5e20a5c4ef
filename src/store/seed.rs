//! First-run seeding of the demo catalog.
//!
//! The order-creation screen needs a non-empty catalog on first launch, so
//! an empty store is seeded with the shop's standard categories and three
//! demonstration products. A store that already has any product is left
//! alone.

use crate::{
    entities::Product,
    errors::Result,
    store::{category::add_category, product::add_product},
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::{debug, info, instrument};

const SEED_CATEGORIES: [&str; 5] = ["Краски", "Кисти", "Холсты", "Бумага", "Мольберты"];

/// (name, category, quantity, price, article, description)
const SEED_PRODUCTS: [(&str, &str, i64, f64, &str, &str); 3] = [
    (
        "Краски 12цв",
        "Краски",
        10,
        1200.0,
        "ART001",
        "Набор масляных красок",
    ),
    ("Кисть №5", "Кисти", 20, 450.0, "ART002", "Беличий ворс"),
    ("Холст 40x50", "Холсты", 5, 900.0, "ART003", "Хлопковый холст"),
];

/// Seeds the demo categories and products into an empty store.
///
/// No-op when any product already exists, so this is safe to run on every
/// startup.
#[instrument(skip(db))]
pub async fn seed_catalog(db: &DatabaseConnection) -> Result<()> {
    if Product::find().count(db).await? > 0 {
        debug!("Catalog already populated; skipping seed.");
        return Ok(());
    }

    for name in SEED_CATEGORIES {
        add_category(db, name).await?;
    }

    for (name, category, quantity, price, article, description) in SEED_PRODUCTS {
        add_product(
            db,
            name.to_string(),
            article.to_string(),
            category.to_string(),
            quantity,
            price,
            description.to_string(),
        )
        .await?;
    }

    info!("Seeded demo catalog: {} products.", SEED_PRODUCTS.len());
    Ok(())
}
