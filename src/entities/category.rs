//! Category entity - Names used to group catalog products.
//!
//! Categories are pure labels: products reference them by name as free text,
//! and nothing enforces that a product's category actually exists here. They
//! are created explicitly or by first-run seeding and are never updated or
//! deleted through the store.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique identifier for the category
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Category name (e.g., "Краски", "Кисти")
    #[sea_orm(unique)]
    pub name: String,
}

/// Categories stand alone; products reference them by name only.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
