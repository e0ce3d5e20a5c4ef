//! Product catalog operations.
//!
//! This module provides the CRUD and search surface for catalog products.
//! The only validation performed is article-code uniqueness: price and
//! quantity are stored as given (zero or negative values are accepted, a
//! deliberate simplification), and the category field is free text. Stock
//! levels are mutated here only through full-replace updates; the decrement
//! that accompanies a sale lives in [`crate::store::order::place_order`].

use crate::{
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{Condition, QueryOrder, Set, prelude::*};

/// Retrieves catalog products ordered by id, optionally filtered.
///
/// A `None` or empty filter returns the whole catalog. A non-empty filter is
/// matched as a case-insensitive substring against name, article, category,
/// and description; a product is returned when any one field matches.
pub async fn list_products(
    db: &DatabaseConnection,
    filter: Option<&str>,
) -> Result<Vec<product::Model>> {
    let mut query = Product::find();

    if let Some(key) = filter.filter(|k| !k.is_empty()) {
        query = query.filter(
            Condition::any()
                .add(product::Column::Name.contains(key))
                .add(product::Column::Article.contains(key))
                .add(product::Column::Category.contains(key))
                .add(product::Column::Description.contains(key)),
        );
    }

    query
        .order_by_asc(product::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all products with stock on hand, ordered alphabetically by name.
///
/// Used to populate the order-creation picker, which must only offer
/// products that can actually be sold.
pub async fn available_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .filter(product::Column::Quantity.gt(0))
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific product by its unique id, or `None` if absent.
pub async fn get_product(db: &DatabaseConnection, product_id: i64) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Looks up a product by its article code. `None` if no product carries it.
pub async fn get_product_by_article(
    db: &DatabaseConnection,
    article: &str,
) -> Result<Option<product::Model>> {
    Product::find()
        .filter(product::Column::Article.eq(article))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new catalog product.
///
/// # Errors
/// Returns [`Error::DuplicateArticle`] when the article code is already in
/// use, or a database error if the insert fails.
pub async fn add_product(
    db: &DatabaseConnection,
    name: String,
    article: String,
    category: String,
    quantity: i64,
    price: f64,
    description: String,
) -> Result<product::Model> {
    if get_product_by_article(db, &article).await?.is_some() {
        return Err(Error::DuplicateArticle { article });
    }

    let product_model = product::ActiveModel {
        name: Set(name),
        article: Set(article),
        category: Set(category),
        quantity: Set(quantity),
        price: Set(price),
        description: Set(description),
        ..Default::default()
    };
    product_model.insert(db).await.map_err(Into::into)
}

/// Replaces every mutable field of an existing product.
///
/// # Errors
/// Returns [`Error::ProductNotFound`] when the id does not exist, or
/// [`Error::DuplicateArticle`] when the new article code belongs to a
/// different product.
pub async fn update_product(
    db: &DatabaseConnection,
    product_id: i64,
    name: String,
    article: String,
    category: String,
    quantity: i64,
    price: f64,
    description: String,
) -> Result<product::Model> {
    let mut product_model: product::ActiveModel = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?
        .into();

    let collision = Product::find()
        .filter(product::Column::Article.eq(article.as_str()))
        .filter(product::Column::Id.ne(product_id))
        .one(db)
        .await?;
    if collision.is_some() {
        return Err(Error::DuplicateArticle { article });
    }

    product_model.name = Set(name);
    product_model.article = Set(article);
    product_model.category = Set(category);
    product_model.quantity = Set(quantity);
    product_model.price = Set(price);
    product_model.description = Set(description);

    product_model.update(db).await.map_err(Into::into)
}

/// Deletes a product unconditionally.
///
/// No cascade check is made against orders or sales: history rows keep
/// their now-dangling product id, and listing/reporting operations render
/// them with a missing product name. Deleting an id that does not exist is
/// also a no-op.
pub async fn delete_product(db: &DatabaseConnection, product_id: i64) -> Result<()> {
    Product::delete_by_id(product_id).exec(db).await?;
    Ok(())
}
