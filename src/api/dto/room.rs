//! Room DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::room::{Room, RoomInput, RoomSearch};

use super::reservation::ReservationDto;

/// Room response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "name": "Great Hall",
    "capacity": 40,
    "has_projector": true,
    "is_available": true,
    "created_at": "2024-01-15T10:30:00+00:00"
}))]
pub struct RoomDto {
    /// Unique room ID
    pub id: i32,
    /// Room name
    pub name: String,
    /// Seating capacity
    pub capacity: i32,
    /// Whether the room has a projector
    pub has_projector: bool,
    /// Cleared when the room gets booked
    pub is_available: bool,
    /// Creation timestamp (ISO 8601)
    pub created_at: String,
    /// Last edit timestamp (ISO 8601)
    pub updated_at: Option<String>,
}

impl From<Room> for RoomDto {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            name: r.name,
            capacity: r.capacity,
            has_projector: r.has_projector,
            is_available: r.is_available,
            created_at: r.created_at.to_rfc3339(),
            updated_at: r.updated_at.map(|d| d.to_rfc3339()),
        }
    }
}

/// Room form fields, used both for creation and editing.
///
/// The checkbox fields default to `false` when omitted, mirroring how an
/// unchecked HTML checkbox simply does not submit its field.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RoomForm {
    /// Room name
    #[validate(length(max = 225, message = "Room name must be at most 225 characters."))]
    pub name: String,
    /// Seating capacity; must be greater than 0
    pub capacity: i32,
    /// Projector flag (absent = false)
    #[serde(default)]
    pub has_projector: bool,
    /// Availability flag (absent = false)
    #[serde(default)]
    pub is_available: bool,
}

impl From<RoomForm> for RoomInput {
    fn from(form: RoomForm) -> Self {
        Self {
            name: form.name,
            capacity: form.capacity,
            has_projector: form.has_projector,
            is_available: form.is_available,
        }
    }
}

/// Room search form. All criteria are optional and combined conjunctively;
/// both range filters apply only when both of their bounds are present.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchRoomsParams {
    /// Case-insensitive substring match on the name
    pub name: Option<String>,
    /// Projector filter; omit for "no filter"
    pub has_projector: Option<bool>,
    /// Lower capacity bound (inclusive)
    pub capacity_from: Option<i32>,
    /// Upper capacity bound (inclusive)
    pub capacity_to: Option<i32>,
    /// Start of the reservation date range (inclusive, ISO date)
    pub reserved_from: Option<NaiveDate>,
    /// End of the reservation date range (inclusive, ISO date)
    pub reserved_to: Option<NaiveDate>,
}

impl From<SearchRoomsParams> for RoomSearch {
    fn from(p: SearchRoomsParams) -> Self {
        Self {
            name: p.name,
            has_projector: p.has_projector,
            capacity_from: p.capacity_from,
            capacity_to: p.capacity_to,
            reserved_from: p.reserved_from,
            reserved_to: p.reserved_to,
        }
    }
}

/// Room detail view: the room plus its reservations in the requested order
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoomDetailDto {
    pub room: RoomDto,
    pub reservations: Vec<ReservationDto>,
}
