//! Store operations - the entire API surface the front end calls into.
//!
//! Each submodule owns the operations for one record kind. All functions are
//! async, take the shared [`sea_orm::DatabaseConnection`] by reference, and
//! return typed results; no ambient global connection exists anywhere in the
//! crate.

/// Category listing and creation
pub mod category;
/// Order placement, listing, and status transitions
pub mod order;
/// Product CRUD and catalog search
pub mod product;
/// Date-ranged sales reporting and revenue totals
pub mod report;
/// First-run demo catalog seeding
pub mod seed;
