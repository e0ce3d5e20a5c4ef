//! Unified error types for the inventory store.
//!
//! Every store operation returns [`Result`]; the front end turns these typed
//! kinds into user-facing messages. The store itself never formats or
//! localizes anything beyond the error text used for logs.

use thiserror::Error;

/// All the ways a store operation can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// Referenced product id does not exist
    #[error("product {id} not found")]
    ProductNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// Referenced order id does not exist
    #[error("order {id} not found")]
    OrderNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// Article code already belongs to a different product
    #[error("article '{article}' is already in use by another product")]
    DuplicateArticle {
        /// The colliding article code
        article: String,
    },

    /// Requested order quantity exceeds current stock
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock {
        /// Quantity the caller asked for
        requested: i64,
        /// Quantity actually in stock at the time of the call
        available: i64,
    },

    /// Underlying persistence layer failed; any in-flight transaction is
    /// rolled back before this surfaces
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Configuration problem during store bootstrap
    #[error("configuration error: {message}")]
    Config {
        /// What was wrong
        message: String,
    },

    /// I/O error outside the database itself
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
