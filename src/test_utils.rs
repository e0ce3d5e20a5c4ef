//! Shared test utilities for `artstock`.
//!
//! This module provides common helper functions for setting up test
//! databases and creating test entities with sensible defaults.

use crate::{
    entities::{product, sale},
    errors::Result,
    store,
};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test product with sensible defaults.
///
/// # Defaults
/// * `category`: "Краски"
/// * `quantity`: 10
/// * `price`: 10.0
/// * `description`: empty
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    article: &str,
) -> Result<product::Model> {
    store::product::add_product(
        db,
        name.to_string(),
        article.to_string(),
        "Краски".to_string(),
        10,
        10.0,
        String::new(),
    )
    .await
}

/// Creates a test product with custom parameters.
/// Use this when the test cares about stock, price, or search fields.
pub async fn create_custom_product(
    db: &DatabaseConnection,
    name: &str,
    article: &str,
    category: &str,
    quantity: i64,
    price: f64,
    description: impl Into<String>,
) -> Result<product::Model> {
    store::product::add_product(
        db,
        name.to_string(),
        article.to_string(),
        category.to_string(),
        quantity,
        price,
        description.into(),
    )
    .await
}

/// Inserts a sale row directly, bypassing order placement.
///
/// Reporting tests need sales on specific past dates, which `place_order`
/// (always "today") cannot produce.
pub async fn create_test_sale(
    db: &DatabaseConnection,
    product_id: i64,
    quantity: i64,
    sale_date: NaiveDate,
    unit_price: f64,
) -> Result<sale::Model> {
    let sale_model = sale::ActiveModel {
        product_id: Set(product_id),
        quantity: Set(quantity),
        sale_date: Set(sale_date),
        unit_price: Set(unit_price),
        ..Default::default()
    };
    sale_model.insert(db).await.map_err(Into::into)
}
