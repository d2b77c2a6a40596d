use std::collections::HashMap;

use chrono::Utc;
use charter_core::dates::parse_calendar_date;
use charter_core::{resolve, CharterFlight, ResolveFailure};
use charter_shared::models::events::{BookingCreatedEvent, BookingStatusChangedEvent};
use tracing::info;
use uuid::Uuid;

use crate::models::{BookingRequest, BookingStatus, CharterBooking};
use crate::validation::{validate_request, BookingRules};

/// Creates charter bookings and drives their status transitions
pub struct BookingManager {
    bookings: HashMap<Uuid, CharterBooking>,
    rules: BookingRules,
}

impl BookingManager {
    pub fn new(rules: BookingRules) -> Self {
        Self {
            bookings: HashMap::new(),
            rules,
        }
    }

    pub fn rules(&self) -> &BookingRules {
        &self.rules
    }

    /// Validate the request, resolve it against `flights` and store a pending booking
    pub fn create_booking(
        &mut self,
        flights: &[CharterFlight],
        request: BookingRequest,
    ) -> Result<CharterBooking, BookingError> {
        validate_request(&request, &self.rules).map_err(BookingError::Validation)?;

        let flight = resolve(flights, &request.wish).map_err(BookingError::Unresolved)?;

        let departure_date =
            parse_calendar_date(&request.wish.date_from).ok_or(BookingError::Unresolved(ResolveFailure::InvalidDate))?;
        let return_date =
            parse_calendar_date(&request.wish.date_to).ok_or(BookingError::Unresolved(ResolveFailure::InvalidDate))?;

        let seated = request.passengers.seated();
        if flight.seats > 0 {
            let available = u64::from(flight.seats).saturating_sub(self.seats_taken(flight.id, departure_date));
            if seated > available {
                return Err(BookingError::InsufficientSeats {
                    requested: seated,
                    available,
                });
            }
        }

        let now = Utc::now();
        let booking = CharterBooking {
            id: Uuid::new_v4(),
            flight_id: flight.id,
            flight_number: flight.flight_number.clone(),
            from: flight.from.clone(),
            to: flight.to.clone(),
            departure_date,
            return_date,
            passengers: request.passengers,
            contact: request.contact,
            comment: request.comment,
            total_amount: i64::from(flight.price_amount)
                .saturating_mul(i64::try_from(seated).unwrap_or(i64::MAX)),
            currency: flight.price_currency.clone(),
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        let event = BookingCreatedEvent {
            booking_id: booking.id,
            flight_id: booking.flight_id,
            passengers: booking.passengers.total(),
            total_amount: booking.total_amount,
            currency: booking.currency.clone(),
            timestamp: now.timestamp(),
        };
        info!(?event, contact = ?booking.contact.email, "Charter booking created");

        self.bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    pub fn get(&self, booking_id: &Uuid) -> Option<&CharterBooking> {
        self.bookings.get(booking_id)
    }

    /// Bookings made with the given contact email, oldest first
    pub fn list_for_contact(&self, email: &str) -> Vec<&CharterBooking> {
        let mut found: Vec<&CharterBooking> = self
            .bookings
            .values()
            .filter(|b| b.contact.email.expose().eq_ignore_ascii_case(email.trim()))
            .collect();
        found.sort_by_key(|b| b.created_at);
        found
    }

    /// Transition: Pending → Confirmed
    pub fn confirm(&mut self, booking_id: &Uuid) -> Result<CharterBooking, BookingError> {
        self.transition(booking_id, BookingStatus::Confirmed, &[BookingStatus::Pending])
    }

    /// Transition: Pending | Confirmed → Cancelled
    pub fn cancel(&mut self, booking_id: &Uuid) -> Result<CharterBooking, BookingError> {
        self.transition(
            booking_id,
            BookingStatus::Cancelled,
            &[BookingStatus::Pending, BookingStatus::Confirmed],
        )
    }

    fn transition(
        &mut self,
        booking_id: &Uuid,
        to: BookingStatus,
        allowed_from: &[BookingStatus],
    ) -> Result<CharterBooking, BookingError> {
        let booking = self.get_booking_mut(booking_id)?;

        if !allowed_from.contains(&booking.status) {
            return Err(BookingError::InvalidTransition {
                from: booking.status.as_str().to_string(),
                to: to.as_str().to_string(),
            });
        }

        let event = BookingStatusChangedEvent {
            booking_id: booking.id,
            from_status: booking.status.as_str().to_string(),
            to_status: to.as_str().to_string(),
            timestamp: Utc::now().timestamp(),
        };
        booking.update_status(to);
        info!(?event, "Charter booking status changed");

        Ok(booking.clone())
    }

    fn seats_taken(&self, flight_id: Uuid, departure_date: chrono::NaiveDate) -> u64 {
        self.bookings
            .values()
            .filter(|b| {
                b.flight_id == flight_id
                    && b.departure_date == departure_date
                    && b.status != BookingStatus::Cancelled
            })
            .map(|b| b.passengers.seated())
            .sum()
    }

    fn get_booking_mut(&mut self, booking_id: &Uuid) -> Result<&mut CharterBooking, BookingError> {
        self.bookings
            .get_mut(booking_id)
            .ok_or_else(|| BookingError::NotFound(booking_id.to_string()))
    }
}

impl Default for BookingManager {
    fn default() -> Self {
        Self::new(BookingRules::default())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Booking request is invalid: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("No matching charter flight: {0}")]
    Unresolved(ResolveFailure),

    #[error("Not enough seats: requested {requested}, available {available}")]
    InsufficientSeats { requested: u64, available: u64 },

    #[error("Booking not found: {0}")]
    NotFound(String),

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactInfo, Passengers};
    use charter_core::CharterBookingWish;
    use charter_shared::pii::Masked;

    fn flights() -> Vec<CharterFlight> {
        let mut flight = CharterFlight::new("MOW", "DXB", "2024-06-01", "2024-06-30", vec![1, 3, 5]);
        flight.flight_number = "CH-101".to_string();
        flight.price_amount = 40_000;
        flight.seats = 4;
        vec![flight]
    }

    fn request(date_from: &str, date_to: &str, adults: u32) -> BookingRequest {
        BookingRequest {
            wish: CharterBookingWish::new("MOW", "DXB", date_from, date_to),
            passengers: Passengers { adults, children: 0, infants: 0 },
            contact: ContactInfo {
                name: "Ivan Petrov".to_string(),
                email: Masked::new("ivan@example.com".to_string()),
                phone: Some(Masked::new("+7 900 000 00 00".to_string())),
            },
            comment: None,
        }
    }

    #[test]
    fn test_booking_lifecycle() {
        let flights = flights();
        let mut manager = BookingManager::default();

        let booking = manager.create_booking(&flights, request("2024-06-03", "2024-06-05", 2)).unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.flight_id, flights[0].id);
        assert_eq!(booking.total_amount, 80_000);
        assert_eq!(booking.departure_date.to_string(), "2024-06-03");

        // Pending → Confirmed
        let confirmed = manager.confirm(&booking.id).unwrap();
        assert_eq!(confirmed.status, BookingStatus::Confirmed);

        // Confirmed → Cancelled
        manager.cancel(&booking.id).unwrap();
        assert_eq!(manager.get(&booking.id).unwrap().status, BookingStatus::Cancelled);

        // Cancelled is final
        assert!(matches!(
            manager.confirm(&booking.id),
            Err(BookingError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_unresolved_wish_creates_nothing() {
        let flights = flights();
        let mut manager = BookingManager::default();

        let result = manager.create_booking(&flights, request("2024-06-04", "2024-06-05", 1));
        assert!(matches!(
            result,
            Err(BookingError::Unresolved(ResolveFailure::DatesNotSupported))
        ));

        let result = manager.create_booking(&[], request("2024-06-03", "2024-06-05", 1));
        assert!(matches!(result, Err(BookingError::Unresolved(ResolveFailure::NoFlights))));
        assert!(manager.list_for_contact("ivan@example.com").is_empty());
    }

    #[test]
    fn test_validation_runs_first() {
        let mut manager = BookingManager::default();
        let result = manager.create_booking(&[], request("2024-06-03", "2024-06-05", 0));
        assert!(matches!(result, Err(BookingError::Validation(_))));
    }

    #[test]
    fn test_seat_capacity_per_departure() {
        let flights = flights();
        let mut manager = BookingManager::default();

        let first = manager.create_booking(&flights, request("2024-06-03", "2024-06-05", 3)).unwrap();
        let result = manager.create_booking(&flights, request("2024-06-03", "2024-06-07", 2));
        assert!(matches!(
            result,
            Err(BookingError::InsufficientSeats { requested: 2, available: 1 })
        ));

        // Another departure day has its own capacity
        manager.create_booking(&flights, request("2024-06-05", "2024-06-07", 2)).unwrap();

        // Cancelling frees the seats
        manager.cancel(&first.id).unwrap();
        manager.create_booking(&flights, request("2024-06-03", "2024-06-07", 2)).unwrap();
    }

    #[test]
    fn test_overflowing_passenger_count_creates_nothing() {
        let flights = flights();
        let mut manager = BookingManager::new(BookingRules { max_passengers: u32::MAX });

        let mut req = request("2024-06-03", "2024-06-05", u32::MAX);
        req.passengers.children = 1;
        let result = manager.create_booking(&flights, req);
        assert!(matches!(result, Err(BookingError::Validation(_))));

        // Within the rules but far beyond the aircraft
        let result = manager.create_booking(&flights, request("2024-06-03", "2024-06-05", u32::MAX));
        assert!(matches!(
            result,
            Err(BookingError::InsufficientSeats { requested: 4_294_967_295, available: 4 })
        ));
        assert!(manager.list_for_contact("ivan@example.com").is_empty());
    }

    #[test]
    fn test_list_for_contact() {
        let flights = flights();
        let mut manager = BookingManager::default();
        manager.create_booking(&flights, request("2024-06-03", "2024-06-05", 1)).unwrap();
        manager.create_booking(&flights, request("2024-06-05", "2024-06-07", 1)).unwrap();

        assert_eq!(manager.list_for_contact("IVAN@example.com").len(), 2);
        assert!(manager.list_for_contact("olga@example.com").is_empty());
    }

    #[test]
    fn test_unknown_booking() {
        let mut manager = BookingManager::default();
        assert!(matches!(manager.cancel(&Uuid::new_v4()), Err(BookingError::NotFound(_))));
    }
}
