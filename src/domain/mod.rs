pub mod error;
pub mod reservation;
pub mod room;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use reservation::{NewReservation, Reservation, ReservationRepository, ReservationSort};
pub use room::{Room, RoomInput, RoomRepository, RoomSearch, RoomSort, SearchOutcome};
