//! Room repository interface

use async_trait::async_trait;

use super::model::{Room, RoomInput, RoomSearch, RoomSort};
use crate::domain::DomainResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Persist a new room and return it with its assigned ID
    async fn save(&self, input: RoomInput) -> DomainResult<Room>;

    /// Find room by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>>;

    /// Find room by exact name
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Room>>;

    /// All rooms in the requested order
    async fn find_all(&self, sort: RoomSort) -> DomainResult<Vec<Room>>;

    /// Overwrite the editable fields of an existing room
    async fn update(&self, id: i32, input: RoomInput) -> DomainResult<Room>;

    /// Set the availability flag of an existing room
    async fn set_availability(&self, id: i32, is_available: bool) -> DomainResult<()>;

    /// Delete a room; its reservations go with it (FK cascade)
    async fn delete(&self, id: i32) -> DomainResult<()>;

    /// Rooms matching the conjunction of the supplied criteria
    async fn search(&self, criteria: &RoomSearch) -> DomainResult<Vec<Room>>;
}
