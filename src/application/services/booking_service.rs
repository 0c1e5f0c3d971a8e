//! Reservation booking use case

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::domain::reservation::{NewReservation, Reservation, ReservationRepository};
use crate::domain::room::RoomRepository;
use crate::domain::{DomainError, DomainResult};

/// Books rooms for single calendar days.
pub struct BookingService {
    rooms: Arc<dyn RoomRepository>,
    reservations: Arc<dyn ReservationRepository>,
}

impl BookingService {
    pub fn new(rooms: Arc<dyn RoomRepository>, reservations: Arc<dyn ReservationRepository>) -> Self {
        Self { rooms, reservations }
    }

    /// Book a room for one day. Terminal on the first failed check:
    ///
    /// 1. the room must exist,
    /// 2. the date string must parse as an ISO calendar date,
    /// 3. the date must not lie in the past (same-day is allowed),
    /// 4. the (room, date) pair must still be free.
    ///
    /// On success the reservation is persisted and the room's availability
    /// flag is cleared. A concurrent booking that slipped past check 4 is
    /// caught by the unique (room, date) index and reported as the same
    /// conflict.
    pub async fn book_room(
        &self,
        room_id: i32,
        date_str: &str,
        comment: String,
    ) -> DomainResult<Reservation> {
        let room = self
            .rooms
            .find_by_id(room_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: room_id.to_string(),
            })?;

        let date: NaiveDate = date_str.parse().map_err(|_| {
            DomainError::validation(vec!["Invalid date format.".to_string()])
        })?;

        let today = Utc::now().date_naive();
        if date < today {
            return Err(DomainError::validation(vec![
                "Date cannot be in the past.".to_string(),
            ]));
        }

        if self
            .reservations
            .find_by_room_and_date(room.id, date)
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict(
                "Room is already reserved for the selected date.".to_string(),
            ));
        }

        let reservation = self
            .reservations
            .save(NewReservation {
                room_id: room.id,
                date,
                comment,
            })
            .await?;

        self.rooms.set_availability(room.id, false).await?;
        Ok(reservation)
    }
}

// ── Tests ──────────────────────────────────────────────────────
