//! # Room Booking Service
//!
//! Administration tool for a catalog of bookable rooms and their
//! day-granularity reservations.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and repository traits
//! - **application**: Use-case services holding every business rule
//! - **infrastructure**: External concerns (database, migrations, SeaORM repositories)
//! - **api**: REST API with Swagger documentation

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use api::create_api_router;
