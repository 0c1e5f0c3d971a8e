//! Reservation DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::reservation::Reservation;

/// Reservation response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    /// Unique reservation ID
    pub id: i32,
    /// The booked room
    pub room_id: i32,
    /// Booked calendar day (ISO date)
    pub date: String,
    /// Free-text comment
    pub comment: String,
    /// Creation timestamp (ISO 8601)
    pub created_at: String,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            room_id: r.room_id,
            date: r.date.to_string(),
            comment: r.comment,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

/// Booking form
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({"date": "2024-06-01", "comment": "all-hands"}))]
pub struct BookRoomRequest {
    /// Requested day as an ISO calendar date string; parsed inside the
    /// booking flow so a malformed value surfaces as its user-visible
    /// message
    pub date: String,
    /// Free-text comment (optional)
    #[serde(default)]
    #[validate(length(max = 225, message = "Comment must be at most 225 characters."))]
    pub comment: String,
}
