use chrono::{DateTime, NaiveDate, Utc};
use charter_core::CharterBookingWish;
use charter_shared::pii::Masked;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Booking status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Passengers {
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub infants: u32,
}

impl Passengers {
    /// Widened so that no combination of counts can overflow
    pub fn total(&self) -> u64 {
        self.seated() + u64::from(self.infants)
    }

    /// Passengers that occupy a seat; infants fly on a lap
    pub fn seated(&self) -> u64 {
        u64::from(self.adults) + u64::from(self.children)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInfo {
    pub name: String,
    pub email: Masked<String>,
    #[serde(default)]
    pub phone: Option<Masked<String>>,
}

/// Booking form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(flatten)]
    pub wish: CharterBookingWish,
    pub passengers: Passengers,
    pub contact: ContactInfo,
    #[serde(default)]
    pub comment: Option<String>,
}

/// A charter booking tied to the flight the resolver picked
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharterBooking {
    pub id: Uuid,
    pub flight_id: Uuid,
    pub flight_number: String,
    pub from: String,
    pub to: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub passengers: Passengers,
    pub contact: ContactInfo,
    pub comment: Option<String>,
    pub total_amount: i64,
    pub currency: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CharterBooking {
    pub fn update_status(&mut self, new_status: BookingStatus) {
        self.status = new_status;
        self.updated_at = Utc::now();
    }
}
