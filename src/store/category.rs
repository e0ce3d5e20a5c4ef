//! Category operations.
//!
//! Categories are simple unique labels used to group catalog products. They
//! are only ever created and listed; nothing updates or deletes them.

use crate::{
    entities::{Category, category},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Returns all category names in alphabetical order.
///
/// Used to populate the category picker when adding or editing a product.
pub async fn list_categories(db: &DatabaseConnection) -> Result<Vec<String>> {
    let categories = Category::find()
        .order_by_asc(category::Column::Name)
        .all(db)
        .await?;

    Ok(categories.into_iter().map(|c| c.name).collect())
}

/// Inserts a category if it does not already exist.
///
/// A duplicate name is a silent no-op, not an error: the front end calls
/// this freely when saving a product with a new category name.
pub async fn add_category(db: &DatabaseConnection, name: &str) -> Result<()> {
    let existing = Category::find()
        .filter(category::Column::Name.eq(name))
        .one(db)
        .await?;

    if existing.is_some() {
        return Ok(());
    }

    let category_model = category::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };
    category_model.insert(db).await?;

    Ok(())
}
