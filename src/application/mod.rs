pub mod services;

pub use services::{BookingService, RoomService};
