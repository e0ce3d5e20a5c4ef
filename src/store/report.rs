//! Sales reporting - date-ranged revenue lines and totals.
//!
//! Reports aggregate the immutable sales history over an inclusive calendar
//! date range. Line totals multiply the recorded quantity by the unit price
//! captured at sale time; nothing here reads current product prices, so
//! later catalog edits never rewrite a past period's revenue.

use crate::{
    entities::{Product, Sale, product, sale},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::prelude::*;
use std::collections::HashMap;

/// One line of a sales report: a sale joined against its product.
#[derive(Debug, Clone)]
pub struct SaleLine {
    /// Product name, `None` when the product has since been deleted
    pub product_name: Option<String>,
    /// Units sold
    pub quantity: i64,
    /// Unit price captured at sale time
    pub unit_price: f64,
    /// `quantity * unit_price`
    pub line_total: f64,
}

/// Returns all sales with `sale_date` in the inclusive range `[start, end]`.
///
/// Left-join semantics against the catalog: sales of deleted products are
/// reported with `None` in place of the name rather than dropped or failed.
pub async fn sales_report(
    db: &DatabaseConnection,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<SaleLine>> {
    let sales = Sale::find()
        .filter(sale::Column::SaleDate.between(start, end))
        .all(db)
        .await?;

    let product_ids: Vec<i64> = sales.iter().map(|s| s.product_id).collect();
    let products: HashMap<i64, String> = Product::find()
        .filter(product::Column::Id.is_in(product_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|p| (p.id, p.name))
        .collect();

    // Cast safety: order quantities are small; f64 represents them exactly.
    #[allow(clippy::cast_precision_loss)]
    let lines = sales
        .into_iter()
        .map(|sale_row| SaleLine {
            product_name: products.get(&sale_row.product_id).cloned(),
            quantity: sale_row.quantity,
            unit_price: sale_row.unit_price,
            line_total: sale_row.quantity as f64 * sale_row.unit_price,
        })
        .collect();

    Ok(lines)
}

/// Sums `quantity * unit_price` over the inclusive range `[start, end]`.
///
/// An empty period totals to `0.0`, never an error.
pub async fn sales_total(db: &DatabaseConnection, start: NaiveDate, end: NaiveDate) -> Result<f64> {
    let sales = Sale::find()
        .filter(sale::Column::SaleDate.between(start, end))
        .all(db)
        .await?;

    #[allow(clippy::cast_precision_loss)]
    let total = sales
        .iter()
        .map(|s| s.quantity as f64 * s.unit_price)
        .sum();

    Ok(total)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::store::order::place_order;
    use crate::store::product::delete_product;
    use crate::test_utils::{create_custom_product, create_test_sale, setup_test_db};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_sales_total_for_today_after_order() -> Result<()> {
        let db = setup_test_db().await?;

        let product =
            create_custom_product(&db, "Краски 12цв", "ART001", "Краски", 10, 1200.0, "Набор")
                .await?;
        place_order(&db, product.id, 3).await?;

        let today = chrono::Local::now().date_naive();
        assert_eq!(sales_total(&db, today, today).await?, 3600.0);

        let report = sales_report(&db, today, today).await?;
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].product_name.as_deref(), Some("Краски 12цв"));
        assert_eq!(report[0].quantity, 3);
        assert_eq!(report[0].unit_price, 1200.0);
        assert_eq!(report[0].line_total, 3600.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_sales_total_empty_period_is_zero() -> Result<()> {
        let db = setup_test_db().await?;

        let total = sales_total(&db, date("2020-01-01"), date("2020-12-31")).await?;
        assert_eq!(total, 0.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_report_range_is_inclusive() -> Result<()> {
        let db = setup_test_db().await?;

        let product =
            create_custom_product(&db, "Кисть", "ART002", "Кисти", 100, 450.0, String::new())
                .await?;

        create_test_sale(&db, product.id, 1, date("2026-03-01"), 450.0).await?;
        create_test_sale(&db, product.id, 2, date("2026-03-15"), 450.0).await?;
        create_test_sale(&db, product.id, 3, date("2026-03-31"), 450.0).await?;

        // Both endpoints included
        let report = sales_report(&db, date("2026-03-01"), date("2026-03-31")).await?;
        assert_eq!(report.len(), 3);

        // Just outside either endpoint, excluded
        let report = sales_report(&db, date("2026-03-02"), date("2026-03-30")).await?;
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].quantity, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_report_additivity_over_split_ranges() -> Result<()> {
        let db = setup_test_db().await?;

        let product =
            create_custom_product(&db, "Холст", "ART003", "Холсты", 100, 900.0, String::new())
                .await?;

        create_test_sale(&db, product.id, 1, date("2026-01-05"), 900.0).await?;
        create_test_sale(&db, product.id, 2, date("2026-01-20"), 900.0).await?;
        create_test_sale(&db, product.id, 4, date("2026-02-10"), 850.0).await?;

        let whole = sales_total(&db, date("2026-01-01"), date("2026-02-28")).await?;
        let first_half = sales_total(&db, date("2026-01-01"), date("2026-01-31")).await?;
        let second_half = sales_total(&db, date("2026-02-01"), date("2026-02-28")).await?;

        assert_eq!(whole, first_half + second_half);
        assert_eq!(whole, 900.0 + 1800.0 + 3400.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_report_tolerates_deleted_product() -> Result<()> {
        let db = setup_test_db().await?;

        let product =
            create_custom_product(&db, "Краски", "ART001", "Краски", 10, 1200.0, String::new())
                .await?;
        place_order(&db, product.id, 2).await?;

        delete_product(&db, product.id).await?;

        let today = chrono::Local::now().date_naive();
        let report = sales_report(&db, today, today).await?;
        assert_eq!(report.len(), 1);
        assert!(report[0].product_name.is_none());
        assert_eq!(report[0].line_total, 2400.0);

        // The total still counts the orphaned sale
        assert_eq!(sales_total(&db, today, today).await?, 2400.0);

        Ok(())
    }
}
