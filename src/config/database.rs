//! Database configuration module for `artstock`.
//!
//! This module handles `SQLite` database connection and table creation using
//! `SeaORM`. Table creation uses `Schema::create_table_from_entity` so the
//! database schema is generated from the entity definitions without manual
//! SQL, and every statement is `IF NOT EXISTS` so initialization is an
//! idempotent migration step, safe to run on every startup.

use crate::entities::{Category, Order, Product, Sale};
use crate::errors::Result;
use crate::store::seed::seed_catalog;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info, instrument};

/// Gets the database URL from the environment or returns the default local
/// `SQLite` path.
///
/// `mode=rwc` makes the first run create the database file instead of
/// failing to open it.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://artstock.sqlite?mode=rwc".to_string())
}

/// Establishes a connection to the `SQLite` database named by
/// [`get_database_url`].
#[instrument]
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    debug!("Connecting to database at {}", database_url);
    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates the four store tables (categories, products, orders, sales) from
/// the entity definitions, if they do not already exist.
#[instrument(skip(db))]
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statements = [
        schema.create_table_from_entity(Category),
        schema.create_table_from_entity(Product),
        schema.create_table_from_entity(Order),
        schema.create_table_from_entity(Sale),
    ];

    for statement in &mut statements {
        statement.if_not_exists();
        db.execute(builder.build(&*statement)).await?;
    }

    info!("Database tables ensured.");
    Ok(())
}

/// One-call store bootstrap: connect, ensure the schema, seed the demo
/// catalog on an empty store. This is what the application entry point (and
/// any attached front end) uses to obtain its single shared connection.
pub async fn init_store() -> Result<DatabaseConnection> {
    let db = create_connection().await?;
    create_tables(&db).await?;
    seed_catalog(&db).await?;
    Ok(db)
}
