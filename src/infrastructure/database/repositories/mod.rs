//! SeaORM repository implementations

pub mod reservation_repository;
pub mod room_repository;

pub use reservation_repository::SeaOrmReservationRepository;
pub use room_repository::SeaOrmRoomRepository;
