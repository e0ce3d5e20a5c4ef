//! Sale entity - Immutable record of a completed stock deduction.
//!
//! Sales are written only by order placement and are never mutated or
//! deleted. `unit_price` captures the product's price at transaction time,
//! so later price changes (or product deletion) never rewrite revenue
//! history.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sale database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    /// Unique identifier for the sale
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Id of the sold product (unenforced reference)
    pub product_id: i64,
    /// Units sold
    pub quantity: i64,
    /// Calendar date of the sale
    pub sale_date: Date,
    /// Unit price at the time of the sale
    pub unit_price: f64,
}

/// No declared relations, for the same orphan-tolerance reason as orders.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
