pub mod model;
pub mod repository;

pub use model::{Room, RoomInput, RoomSearch, RoomSort, SearchOutcome};
pub use repository::RoomRepository;
