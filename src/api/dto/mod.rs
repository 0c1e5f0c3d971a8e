//! API DTOs

pub mod common;
pub mod reservation;
pub mod room;

pub use common::{ApiResponse, SortQuery};
pub use reservation::{BookRoomRequest, ReservationDto};
pub use room::{RoomDetailDto, RoomDto, RoomForm, SearchRoomsParams};
