//! Order operations - placement, listing, and status transitions.
//!
//! Order placement is the one compound operation in the store: it checks
//! availability, writes an order row and a sale row, and decrements stock,
//! all inside a single database transaction so a failure partway (including
//! a crash between statements) leaves the prior consistent state. Everything
//! else here is a single statement.

use crate::{
    entities::{Order, Product, order, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::{info, instrument};

/// Lifecycle status of an order.
///
/// Stored as its lowercase string value. No transition table is enforced:
/// any status may move to any other, including out of the terminal ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Newly placed, awaiting handling (every order starts here)
    Pending,
    /// Being picked/packed
    Processing,
    /// Fulfilled
    Completed,
    /// Abandoned; cancelling does not restock the product
    Cancelled,
}

impl OrderStatus {
    /// The string value stored in the `orders.status` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(Error::Config {
                message: format!("unknown order status '{other}'"),
            }),
        }
    }
}

/// One row of the order listing: the order joined against its product.
///
/// `article` and `product_name` are `None` when the product has since been
/// deleted; the dangling reference is expected and must not fail the
/// listing.
#[derive(Debug, Clone)]
pub struct OrderLine {
    /// The order itself
    pub order: order::Model,
    /// Article code of the ordered product, if it still exists
    pub article: Option<String>,
    /// Name of the ordered product, if it still exists
    pub product_name: Option<String>,
}

/// Places an order for `quantity` units of a product.
///
/// As a single atomic unit of work this inserts a new pending order dated
/// today, records a sale capturing the product's current unit price, and
/// decrements the product's stock. Either all three writes commit or none
/// do; a failed call is guaranteed to leave orders, sales, and stock
/// untouched.
///
/// # Errors
/// Returns [`Error::ProductNotFound`] when the product id does not exist,
/// or [`Error::InsufficientStock`] (carrying the available quantity) when
/// the request exceeds stock on hand.
#[instrument(skip(db))]
pub async fn place_order(
    db: &DatabaseConnection,
    product_id: i64,
    quantity: i64,
) -> Result<order::Model> {
    let txn = db.begin().await?;

    let product = Product::find_by_id(product_id)
        .one(&txn)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?;

    if quantity > product.quantity {
        return Err(Error::InsufficientStock {
            requested: quantity,
            available: product.quantity,
        });
    }

    let today = chrono::Local::now().date_naive();

    let order_model = order::ActiveModel {
        product_id: Set(product_id),
        quantity: Set(quantity),
        order_date: Set(today),
        status: Set(OrderStatus::Pending.as_str().to_string()),
        ..Default::default()
    };
    let placed = order_model.insert(&txn).await?;

    let sale_model = crate::entities::sale::ActiveModel {
        product_id: Set(product_id),
        quantity: Set(quantity),
        sale_date: Set(today),
        unit_price: Set(product.price),
        ..Default::default()
    };
    sale_model.insert(&txn).await?;

    // Atomic decrement: quantity = quantity - ?
    use sea_orm::sea_query::Expr;
    Product::update_many()
        .col_expr(
            product::Column::Quantity,
            Expr::col(product::Column::Quantity).sub(quantity),
        )
        .filter(product::Column::Id.eq(product_id))
        .exec(&txn)
        .await?;

    txn.commit().await?;

    info!(
        order_id = placed.id,
        product_id, quantity, "order placed"
    );
    Ok(placed)
}

/// Lists all orders, newest first, each joined against its product.
///
/// The join is left-join shaped: orders whose product has been deleted are
/// still returned, with `None` in place of the article and name.
pub async fn list_orders(db: &DatabaseConnection) -> Result<Vec<OrderLine>> {
    let orders = Order::find()
        .order_by_desc(order::Column::Id)
        .all(db)
        .await?;

    let product_ids: Vec<i64> = orders.iter().map(|o| o.product_id).collect();
    let products: HashMap<i64, product::Model> = Product::find()
        .filter(product::Column::Id.is_in(product_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    Ok(orders
        .into_iter()
        .map(|order_row| {
            let product = products.get(&order_row.product_id);
            OrderLine {
                article: product.map(|p| p.article.clone()),
                product_name: product.map(|p| p.name.clone()),
                order: order_row,
            }
        })
        .collect())
}

/// Sets an order's status, unconditionally.
///
/// Any status may be assigned regardless of the current one. Note that
/// moving an order to [`OrderStatus::Cancelled`] does NOT restock the
/// product: the stock deduction and the sale record made at placement time
/// stand. This mirrors the behavior of the system this store was built for
/// and is kept deliberately rather than inferring restock-on-cancel
/// semantics.
///
/// # Errors
/// Returns [`Error::OrderNotFound`] when the order id does not exist.
pub async fn set_order_status(
    db: &DatabaseConnection,
    order_id: i64,
    status: OrderStatus,
) -> Result<order::Model> {
    let mut order_model: order::ActiveModel = Order::find_by_id(order_id)
        .one(db)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?
        .into();

    order_model.status = Set(status.as_str().to_string());
    order_model.update(db).await.map_err(Into::into)
}
