//! API Handlers

pub mod health;
pub mod reservations;
pub mod rooms;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::application::{BookingService, RoomService};
use crate::domain::DomainError;

/// Shared state for all room and reservation routes
#[derive(Clone)]
pub struct AppState {
    pub rooms: Arc<RoomService>,
    pub bookings: Arc<BookingService>,
}

/// Map a domain error onto its HTTP status and response envelope.
pub fn domain_error_response(err: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    let status = match &err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiResponse::errors(err.messages())))
}
