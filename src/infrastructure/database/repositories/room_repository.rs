//! SeaORM implementation of RoomRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::domain::room::{Room, RoomInput, RoomRepository, RoomSearch, RoomSort};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{reservation, room};

pub struct SeaOrmRoomRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: room::Model) -> Room {
    Room {
        id: m.id,
        name: m.name,
        capacity: m.capacity,
        has_projector: m.has_projector,
        is_available: m.is_available,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

// ── RoomRepository impl ─────────────────────────────────────────

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn save(&self, input: RoomInput) -> DomainResult<Room> {
        debug!("Saving room: {}", input.name);

        let model = room::ActiveModel {
            name: Set(input.name),
            capacity: Set(input.capacity),
            has_projector: Set(input.has_projector),
            is_available: Set(input.is_available),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(saved))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>> {
        let model = room::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Room>> {
        let model = room::Entity::find()
            .filter(room::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self, sort: RoomSort) -> DomainResult<Vec<Room>> {
        let mut query = room::Entity::find();
        query = match sort {
            RoomSort::Unsorted => query,
            RoomSort::CapacityDesc => query.order_by_desc(room::Column::Capacity),
            RoomSort::CapacityAsc => query.order_by_asc(room::Column::Capacity),
        };
        let models = query.all(&self.db).await.map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, id: i32, input: RoomInput) -> DomainResult<Room> {
        debug!("Updating room: {}", id);

        let existing = room::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: id.to_string(),
            });
        };

        let mut active: room::ActiveModel = existing.into();
        active.name = Set(input.name);
        active.capacity = Set(input.capacity);
        active.has_projector = Set(input.has_projector);
        active.is_available = Set(input.is_available);
        active.updated_at = Set(Some(Utc::now()));
        let updated = active.update(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(updated))
    }

    async fn set_availability(&self, id: i32, is_available: bool) -> DomainResult<()> {
        let existing = room::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: id.to_string(),
            });
        };

        let mut active: room::ActiveModel = existing.into();
        active.is_available = Set(is_available);
        active.updated_at = Set(Some(Utc::now()));
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        debug!("Deleting room: {}", id);

        let result = room::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }

    async fn search(&self, criteria: &RoomSearch) -> DomainResult<Vec<Room>> {
        let mut query = room::Entity::find();

        if let Some(name) = criteria.name_filter() {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col((room::Entity, room::Column::Name))))
                    .like(format!("%{}%", name.to_lowercase())),
            );
        }

        if let Some(has_projector) = criteria.has_projector {
            query = query.filter(room::Column::HasProjector.eq(has_projector));
        }

        if let Some((from, to)) = criteria.capacity_range() {
            query = query.filter(room::Column::Capacity.between(from, to));
        }

        // Rooms holding at least one reservation inside the date range
        if let Some((from, to)) = criteria.reserved_range() {
            query = query
                .inner_join(reservation::Entity)
                .filter(reservation::Column::Date.between(from, to))
                .distinct();
        }

        let models = query.all(&self.db).await.map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
