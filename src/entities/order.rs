//! Order entity - A request to sell a quantity of a product.
//!
//! Orders are created only by order placement (always starting "pending")
//! and are never deleted; their status moves through the lifecycle via
//! [`crate::store::order::set_order_status`]. `product_id` is an unenforced
//! reference: the product may be deleted later, and listings must tolerate
//! the dangling id.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Id of the ordered product (unenforced reference)
    pub product_id: i64,
    /// Units ordered
    pub quantity: i64,
    /// Calendar date the order was placed
    pub order_date: Date,
    /// Lifecycle status, one of the [`crate::store::order::OrderStatus`]
    /// string values
    pub status: String,
}

/// No declared relations: the product reference is a plain lookup so that
/// product deletion never cascades into (or is blocked by) order history.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
