//! Product entity - A catalog item with current stock and price.
//!
//! The `article` column is the shop's human-readable product code (SKU) and
//! must be unique across the catalog. `quantity` is the stock on hand; it is
//! only ever decremented by order placement, which guards against going
//! negative. `category` is free text that should name a category row but is
//! deliberately not constrained to.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the product (e.g., "Краски 12цв")
    pub name: String,
    /// Category name this product belongs to (free text, unconstrained)
    pub category: String,
    /// Units currently in stock
    pub quantity: i64,
    /// Current unit price
    pub price: f64,
    /// Unique article code (SKU equivalent, e.g., "ART001")
    #[sea_orm(unique)]
    pub article: String,
    /// Free-form product description
    pub description: String,
}

/// Orders and sales point at products by id, but the reference is a lookup,
/// not an ownership edge; no relations (and no foreign keys) are declared so
/// that deleting a product leaves its history rows intact.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
