//! Reservation domain entity

use chrono::{DateTime, NaiveDate, Utc};

/// A single-day booking of one room, uniquely keyed by (room, date)
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    /// Unique reservation ID
    pub id: i32,
    /// The room this reservation belongs to
    pub room_id: i32,
    /// The booked calendar day (no time component)
    pub date: NaiveDate,
    /// Free-text comment attached by the booker
    pub comment: String,
    /// When the reservation was created
    pub created_at: DateTime<Utc>,
}

/// Input for a new reservation. Reservations are never updated; they only
/// disappear when their room is deleted.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub room_id: i32,
    pub date: NaiveDate,
    pub comment: String,
}

/// Reservation list ordering for the room detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationSort {
    /// Default, and sort option "1"
    DateAsc,
    /// Sort option "2"
    DateDesc,
}

impl ReservationSort {
    /// Map the raw `sort_option` form value; anything unrecognized gets the
    /// default ascending order.
    pub fn from_option(opt: Option<&str>) -> Self {
        match opt {
            Some("2") => Self::DateDesc,
            _ => Self::DateAsc,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
