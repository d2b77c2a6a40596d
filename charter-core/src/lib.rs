pub mod dates;
pub mod flight;
pub mod repository;
pub mod resolver;
pub mod schedule;

pub use flight::{CharterBookingWish, CharterFlight, Route};
pub use repository::CharterFlightRepository;
pub use resolver::{resolve, ResolveFailure, ResolveOutcome};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
