//! REST API module for the room booking service
//!
//! Provides HTTP endpoints for managing rooms and booking reservations.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod router;

pub use router::create_api_router;
