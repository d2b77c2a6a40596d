pub mod manager;
pub mod messages;
pub mod models;
pub mod validation;

pub use manager::{BookingError, BookingManager};
pub use models::{BookingRequest, BookingStatus, CharterBooking, ContactInfo, Passengers};
pub use validation::BookingRules;
