use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates::{iso_weekday, window_date, within};

/// A scheduled charter flight as published in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CharterFlight {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub flight_number: String,
    #[serde(default)]
    pub carrier: String,
    pub from: String,
    pub to: String,
    /// Start of the validity window, ISO date or date-time
    pub date_from: String,
    /// End of the validity window (inclusive)
    pub date_to: String,
    /// Operating days, Monday = 1 … Sunday = 7
    pub week_days: Vec<u8>,
    #[serde(default)]
    pub price_amount: i32,
    #[serde(default = "default_currency")]
    pub price_currency: String,
    #[serde(default)]
    pub seats: u32,
}

fn default_currency() -> String {
    "RUB".to_string()
}

impl CharterFlight {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        date_from: impl Into<String>,
        date_to: impl Into<String>,
        week_days: Vec<u8>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            flight_number: String::new(),
            carrier: String::new(),
            from: from.into(),
            to: to.into(),
            date_from: date_from.into(),
            date_to: date_to.into(),
            week_days,
            price_amount: 0,
            price_currency: default_currency(),
            seats: 0,
        }
    }

    pub fn serves(&self, from: &str, to: &str) -> bool {
        self.from == from && self.to == to
    }

    /// Parsed validity window. `None` when either bound is not a calendar date.
    pub fn validity_window(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = window_date(&self.date_from)?;
        let end = window_date(&self.date_to)?;
        Some((start, end))
    }

    /// True when the date lies in the validity window and falls on an operating weekday.
    pub fn operates_on(&self, date: NaiveDate) -> bool {
        let Some((start, end)) = self.validity_window() else {
            return false;
        };
        within(date, start, end) && self.week_days.contains(&iso_weekday(date))
    }

    pub fn route(&self) -> Route {
        Route {
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

/// What the client asked for on the booking form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CharterBookingWish {
    pub from: String,
    pub to: String,
    pub date_from: String,
    pub date_to: String,
}

impl CharterBookingWish {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        date_from: impl Into<String>,
        date_to: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            date_from: date_from.into(),
            date_to: date_to.into(),
        }
    }
}

/// An ordered (origin, destination) pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Route {
    pub from: String,
    pub to: String,
}
