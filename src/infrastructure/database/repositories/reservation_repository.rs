//! SeaORM implementation of ReservationRepository

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::reservation::{
    NewReservation, Reservation, ReservationRepository, ReservationSort,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::reservation;

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model) -> Reservation {
    Reservation {
        id: m.id,
        room_id: m.room_id,
        date: m.date,
        comment: m.comment,
        created_at: m.created_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn save(&self, r: NewReservation) -> DomainResult<Reservation> {
        debug!("Saving reservation: room {} on {}", r.room_id, r.date);

        let model = reservation::ActiveModel {
            room_id: Set(r.room_id),
            date: Set(r.date),
            comment: Set(r.comment),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        // The unique (room_id, date) index is the backstop for concurrent
        // bookings that both passed the conflict check.
        let saved = model.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") || e.to_string().contains("duplicate") {
                DomainError::Conflict("Room is already reserved for the selected date.".to_string())
            } else {
                db_err(e)
            }
        })?;
        Ok(model_to_domain(saved))
    }

    async fn find_by_room_and_date(
        &self,
        room_id: i32,
        date: NaiveDate,
    ) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find()
            .filter(reservation::Column::RoomId.eq(room_id))
            .filter(reservation::Column::Date.eq(date))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_for_room(
        &self,
        room_id: i32,
        sort: ReservationSort,
    ) -> DomainResult<Vec<Reservation>> {
        let query = reservation::Entity::find().filter(reservation::Column::RoomId.eq(room_id));
        let query = match sort {
            ReservationSort::DateAsc => query.order_by_asc(reservation::Column::Date),
            ReservationSort::DateDesc => query.order_by_desc(reservation::Column::Date),
        };
        let models = query.all(&self.db).await.map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
