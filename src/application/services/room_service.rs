//! Room management use cases

use std::sync::Arc;

use crate::domain::reservation::{Reservation, ReservationRepository, ReservationSort};
use crate::domain::room::{Room, RoomInput, RoomRepository, RoomSearch, RoomSort, SearchOutcome};
use crate::domain::{DomainError, DomainResult};

/// Create/edit/delete/list/search over the room catalog.
pub struct RoomService {
    rooms: Arc<dyn RoomRepository>,
    reservations: Arc<dyn ReservationRepository>,
}

impl RoomService {
    pub fn new(rooms: Arc<dyn RoomRepository>, reservations: Arc<dyn ReservationRepository>) -> Self {
        Self { rooms, reservations }
    }

    /// Create a room.
    ///
    /// The three checks (blank name, duplicate name, non-positive capacity)
    /// are evaluated independently so a bad form reports every failure in
    /// one go.
    pub async fn create_room(&self, input: RoomInput) -> DomainResult<Room> {
        let mut messages = input.validation_messages();
        if self.rooms.find_by_name(&input.name).await?.is_some() {
            messages.push("A room with this name already exists.".to_string());
        }
        if !messages.is_empty() {
            return Err(DomainError::validation(messages));
        }
        self.rooms.save(input).await
    }

    /// Overwrite an existing room with the submitted form fields.
    ///
    /// Name uniqueness is deliberately NOT re-checked here; only creation
    /// enforces it (see DESIGN.md).
    pub async fn update_room(&self, id: i32, input: RoomInput) -> DomainResult<Room> {
        if self.rooms.find_by_id(id).await?.is_none() {
            return Err(room_not_found(id));
        }

        let messages = input.validation_messages();
        if !messages.is_empty() {
            return Err(DomainError::validation(messages));
        }
        self.rooms.update(id, input).await
    }

    /// Single room lookup (edit form, delete confirmation).
    pub async fn get_room(&self, id: i32) -> DomainResult<Room> {
        self.rooms.find_by_id(id).await?.ok_or_else(|| room_not_found(id))
    }

    /// Delete a room; its reservations are removed by cascade. Returns the
    /// deleted room so callers can name it in the status message.
    pub async fn delete_room(&self, id: i32) -> DomainResult<Room> {
        let room = self.get_room(id).await?;
        self.rooms.delete(id).await?;
        Ok(room)
    }

    /// All rooms, optionally ordered by capacity.
    pub async fn list_rooms(&self, sort: RoomSort) -> DomainResult<Vec<Room>> {
        self.rooms.find_all(sort).await
    }

    /// A room plus its reservations in the requested date order.
    pub async fn room_detail(
        &self,
        id: i32,
        sort: ReservationSort,
    ) -> DomainResult<(Room, Vec<Reservation>)> {
        let room = self.get_room(id).await?;
        let reservations = self.reservations.find_for_room(id, sort).await?;
        Ok((room, reservations))
    }

    /// Filtered room search. With zero criteria no query runs at all and
    /// the caller gets [`SearchOutcome::NoCriteria`] back.
    pub async fn search_rooms(&self, criteria: RoomSearch) -> DomainResult<SearchOutcome> {
        if !criteria.has_criteria() {
            return Ok(SearchOutcome::NoCriteria);
        }
        let rooms = self.rooms.search(&criteria).await?;
        Ok(SearchOutcome::Found(rooms))
    }
}

fn room_not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "Room",
        field: "id",
        value: id.to_string(),
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    use crate::domain::reservation::NewReservation;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::repositories::{
        SeaOrmReservationRepository, SeaOrmRoomRepository,
    };

    async fn setup() -> (RoomService, Arc<SeaOrmReservationRepository>) {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        let reservations = Arc::new(SeaOrmReservationRepository::new(db.clone()));
        let service = RoomService::new(
            Arc::new(SeaOrmRoomRepository::new(db)),
            reservations.clone(),
        );
        (service, reservations)
    }

    fn input(name: &str, capacity: i32) -> RoomInput {
        RoomInput {
            name: name.to_string(),
            capacity,
            has_projector: false,
            is_available: true,
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn create_persists_valid_room() {
        let (service, _) = setup().await;
        let room = service.create_room(input("Atrium", 10)).await.unwrap();
        assert!(room.id > 0);
        assert_eq!(room.name, "Atrium");
        assert_eq!(room.capacity, 10);
        assert!(room.is_available);
        assert_eq!(service.list_rooms(RoomSort::Unsorted).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_never_persists_non_positive_capacity() {
        let (service, _) = setup().await;
        for capacity in [0, -1, -100] {
            let err = service.create_room(input("Hall", capacity)).await.unwrap_err();
            assert!(err
                .messages()
                .contains(&"Room capacity must be greater than 0.".to_string()));
        }
        assert!(service.list_rooms(RoomSort::Unsorted).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_duplicate_name_and_leaves_store_unchanged() {
        let (service, _) = setup().await;
        service.create_room(input("Hall", 40)).await.unwrap();

        let err = service.create_room(input("Hall", 12)).await.unwrap_err();
        assert_eq!(
            err.messages(),
            vec!["A room with this name already exists."]
        );
        assert_eq!(service.list_rooms(RoomSort::Unsorted).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_surfaces_all_failures_together() {
        let (service, _) = setup().await;
        service.create_room(input("Hall", 40)).await.unwrap();

        let err = service.create_room(input("Hall", 0)).await.unwrap_err();
        let messages = err.messages();
        assert!(messages.contains(&"Room capacity must be greater than 0.".to_string()));
        assert!(messages.contains(&"A room with this name already exists.".to_string()));

        let err = service.create_room(input("", -1)).await.unwrap_err();
        assert_eq!(
            err.messages(),
            vec![
                "Room name not provided.",
                "Room capacity must be greater than 0.",
            ]
        );
    }

    #[tokio::test]
    async fn update_overwrites_all_form_fields() {
        let (service, _) = setup().await;
        let room = service.create_room(input("Atrium", 10)).await.unwrap();

        let updated = service
            .update_room(
                room.id,
                RoomInput {
                    name: "Forum".to_string(),
                    capacity: 25,
                    has_projector: true,
                    is_available: false,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Forum");
        assert_eq!(updated.capacity, 25);
        assert!(updated.has_projector);
        assert!(!updated.is_available);
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn update_does_not_recheck_name_uniqueness() {
        let (service, _) = setup().await;
        service.create_room(input("Atrium", 10)).await.unwrap();
        let other = service.create_room(input("Hall", 40)).await.unwrap();

        // Renaming Hall to Atrium is accepted; only create enforces the rule.
        let renamed = service.update_room(other.id, input("Atrium", 40)).await.unwrap();
        assert_eq!(renamed.name, "Atrium");
    }

    #[tokio::test]
    async fn update_validates_fields_independently() {
        let (service, _) = setup().await;
        let room = service.create_room(input("Atrium", 10)).await.unwrap();

        let err = service.update_room(room.id, input("", 0)).await.unwrap_err();
        assert_eq!(
            err.messages(),
            vec![
                "Room name not provided.",
                "Room capacity must be greater than 0.",
            ]
        );
    }

    #[tokio::test]
    async fn update_missing_room_is_not_found() {
        let (service, _) = setup().await;
        let err = service.update_room(9999, input("Atrium", 10)).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_cascades_to_reservations() {
        let (service, reservations) = setup().await;
        let room = service.create_room(input("Hall", 40)).await.unwrap();

        reservations
            .save(NewReservation {
                room_id: room.id,
                date: date("2030-05-01"),
                comment: "standup".to_string(),
            })
            .await
            .unwrap();
        reservations
            .save(NewReservation {
                room_id: room.id,
                date: date("2030-05-02"),
                comment: String::new(),
            })
            .await
            .unwrap();

        service.delete_room(room.id).await.unwrap();

        let err = service.get_room(room.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        let left = reservations
            .find_for_room(room.id, ReservationSort::DateAsc)
            .await
            .unwrap();
        assert!(left.is_empty());
    }

    #[tokio::test]
    async fn delete_missing_room_is_not_found() {
        let (service, _) = setup().await;
        let err = service.delete_room(123).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn capacity_sorts_are_reverses_of_each_other() {
        let (service, _) = setup().await;
        for (name, capacity) in [("A", 10), ("B", 40), ("C", 25)] {
            service.create_room(input(name, capacity)).await.unwrap();
        }

        let desc = service.list_rooms(RoomSort::CapacityDesc).await.unwrap();
        let asc = service.list_rooms(RoomSort::CapacityAsc).await.unwrap();

        let desc_caps: Vec<i32> = desc.iter().map(|r| r.capacity).collect();
        let asc_caps: Vec<i32> = asc.iter().map(|r| r.capacity).collect();
        assert_eq!(desc_caps, vec![40, 25, 10]);
        let mut reversed = asc_caps.clone();
        reversed.reverse();
        assert_eq!(desc_caps, reversed);
    }

    #[tokio::test]
    async fn room_detail_orders_reservations_by_date() {
        let (service, reservations) = setup().await;
        let room = service.create_room(input("Hall", 40)).await.unwrap();
        for day in ["2030-05-03", "2030-05-01", "2030-05-02"] {
            reservations
                .save(NewReservation {
                    room_id: room.id,
                    date: date(day),
                    comment: String::new(),
                })
                .await
                .unwrap();
        }

        let (_, asc) = service
            .room_detail(room.id, ReservationSort::DateAsc)
            .await
            .unwrap();
        let days: Vec<NaiveDate> = asc.iter().map(|r| r.date).collect();
        assert_eq!(
            days,
            vec![date("2030-05-01"), date("2030-05-02"), date("2030-05-03")]
        );

        let (_, desc) = service
            .room_detail(room.id, ReservationSort::DateDesc)
            .await
            .unwrap();
        let days: Vec<NaiveDate> = desc.iter().map(|r| r.date).collect();
        assert_eq!(
            days,
            vec![date("2030-05-03"), date("2030-05-02"), date("2030-05-01")]
        );
    }

    #[tokio::test]
    async fn search_without_criteria_runs_no_query() {
        let (service, _) = setup().await;
        service.create_room(input("Hall", 40)).await.unwrap();

        let outcome = service.search_rooms(RoomSearch::default()).await.unwrap();
        assert_eq!(outcome, SearchOutcome::NoCriteria);
    }

    #[tokio::test]
    async fn search_by_capacity_range() {
        let (service, _) = setup().await;
        service.create_room(input("Atrium", 10)).await.unwrap();
        service.create_room(input("Hall", 40)).await.unwrap();

        let outcome = service
            .search_rooms(RoomSearch {
                capacity_from: Some(20),
                capacity_to: Some(50),
                ..Default::default()
            })
            .await
            .unwrap();

        match outcome {
            SearchOutcome::Found(rooms) => {
                assert_eq!(rooms.len(), 1);
                assert_eq!(rooms[0].name, "Hall");
            }
            SearchOutcome::NoCriteria => panic!("criteria were supplied"),
        }
    }

    #[tokio::test]
    async fn search_name_is_case_insensitive_substring() {
        let (service, _) = setup().await;
        service.create_room(input("Great Hall", 40)).await.unwrap();
        service.create_room(input("Atrium", 10)).await.unwrap();

        let outcome = service
            .search_rooms(RoomSearch {
                name: Some("hALL".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        match outcome {
            SearchOutcome::Found(rooms) => {
                assert_eq!(rooms.len(), 1);
                assert_eq!(rooms[0].name, "Great Hall");
            }
            SearchOutcome::NoCriteria => panic!("criteria were supplied"),
        }
    }

    #[tokio::test]
    async fn search_projector_filter_is_tri_state() {
        let (service, _) = setup().await;
        service
            .create_room(RoomInput {
                has_projector: true,
                ..input("Hall", 40)
            })
            .await
            .unwrap();
        service.create_room(input("Atrium", 10)).await.unwrap();

        let with = service
            .search_rooms(RoomSearch {
                has_projector: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();
        let without = service
            .search_rooms(RoomSearch {
                has_projector: Some(false),
                ..Default::default()
            })
            .await
            .unwrap();

        match with {
            SearchOutcome::Found(rooms) => {
                assert_eq!(rooms.len(), 1);
                assert_eq!(rooms[0].name, "Hall");
            }
            SearchOutcome::NoCriteria => panic!("criteria were supplied"),
        }
        match without {
            SearchOutcome::Found(rooms) => {
                assert_eq!(rooms.len(), 1);
                assert_eq!(rooms[0].name, "Atrium");
            }
            SearchOutcome::NoCriteria => panic!("criteria were supplied"),
        }
    }

    #[tokio::test]
    async fn search_by_reservation_date_range_matches_reserved_rooms_once() {
        let (service, reservations) = setup().await;
        let hall = service.create_room(input("Hall", 40)).await.unwrap();
        service.create_room(input("Atrium", 10)).await.unwrap();

        for day in ["2030-06-01", "2030-06-02"] {
            reservations
                .save(NewReservation {
                    room_id: hall.id,
                    date: date(day),
                    comment: String::new(),
                })
                .await
                .unwrap();
        }

        let outcome = service
            .search_rooms(RoomSearch {
                reserved_from: Some(date("2030-06-01")),
                reserved_to: Some(date("2030-06-30")),
                ..Default::default()
            })
            .await
            .unwrap();

        match outcome {
            SearchOutcome::Found(rooms) => {
                // Two in-range reservations still yield the room once.
                assert_eq!(rooms.len(), 1);
                assert_eq!(rooms[0].name, "Hall");
            }
            SearchOutcome::NoCriteria => panic!("criteria were supplied"),
        }
    }

    #[tokio::test]
    async fn search_with_criteria_but_no_match_returns_empty_found() {
        let (service, _) = setup().await;
        service.create_room(input("Atrium", 10)).await.unwrap();

        let outcome = service
            .search_rooms(RoomSearch {
                name: Some("Ballroom".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(outcome, SearchOutcome::Found(vec![]));
    }
}
