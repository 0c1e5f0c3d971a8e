//! Reservation repository interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{NewReservation, Reservation, ReservationSort};
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Persist a new reservation.
    ///
    /// The store enforces uniqueness of (room, date); a violation is
    /// reported as a conflict, not a generic database error.
    async fn save(&self, reservation: NewReservation) -> DomainResult<Reservation>;

    /// The reservation for a (room, date) pair, if one exists
    async fn find_by_room_and_date(
        &self,
        room_id: i32,
        date: NaiveDate,
    ) -> DomainResult<Option<Reservation>>;

    /// All reservations of a room in the requested date order
    async fn find_for_room(
        &self,
        room_id: i32,
        sort: ReservationSort,
    ) -> DomainResult<Vec<Reservation>>;
}
