//! Application services
//!
//! Use-case orchestration over the repository traits. All business rules
//! live here; handlers only translate between HTTP and these services.

pub mod booking_service;
pub mod room_service;

pub use booking_service::BookingService;
pub use room_service::RoomService;
