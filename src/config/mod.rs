/// Database connection, schema creation, and store bootstrap
pub mod database;
