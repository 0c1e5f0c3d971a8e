//! External concerns: database connection, entities, migrations and
//! repository implementations.

pub mod database;

pub use database::{init_database, DatabaseConfig};
