pub mod model;
pub mod repository;

pub use model::{NewReservation, Reservation, ReservationSort};
pub use repository::ReservationRepository;
