use std::sync::Arc;

use charter_booking::{BookingManager, BookingRules};
use charter_core::CharterFlightRepository;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub flight_repo: Arc<dyn CharterFlightRepository>,
    pub bookings: Arc<RwLock<BookingManager>>,
}

impl AppState {
    pub fn new(flight_repo: Arc<dyn CharterFlightRepository>, rules: BookingRules) -> Self {
        Self {
            flight_repo,
            bookings: Arc::new(RwLock::new(BookingManager::new(rules))),
        }
    }
}
