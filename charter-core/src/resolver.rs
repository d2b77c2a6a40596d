use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dates::parse_calendar_date;
use crate::flight::{CharterBookingWish, CharterFlight};

/// Why no flight could be picked for a wish
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum ResolveFailure {
    #[error("no charter flights available")]
    NoFlights,
    #[error("no charter flight on the requested route")]
    RouteNotFound,
    #[error("requested dates are not operated on this route")]
    DatesNotSupported,
    #[error("requested dates are not valid calendar dates")]
    InvalidDate,
}

impl ResolveFailure {
    pub fn code(&self) -> &'static str {
        match self {
            ResolveFailure::NoFlights => "no_flights",
            ResolveFailure::RouteNotFound => "route_not_found",
            ResolveFailure::DatesNotSupported => "dates_not_supported",
            ResolveFailure::InvalidDate => "invalid_date",
        }
    }
}

/// Picks the flight that serves a booking wish.
///
/// Checks run in a fixed order and stop at the first failure: empty catalog,
/// route match, wish date parsing, then validity window and weekday schedule.
/// Date parsing happens only after the route filter, so a malformed date on
/// an unknown route reports `RouteNotFound`. When several flights qualify the
/// earliest one in `flights` wins.
pub fn resolve<'a>(
    flights: &'a [CharterFlight],
    wish: &CharterBookingWish,
) -> Result<&'a CharterFlight, ResolveFailure> {
    let outcome = pick(flights, wish);
    match &outcome {
        Ok(flight) => debug!(
            from = %wish.from, to = %wish.to, flight_id = %flight.id,
            "Charter wish resolved"
        ),
        Err(reason) => debug!(
            from = %wish.from, to = %wish.to, reason = reason.code(),
            "Charter wish unresolved"
        ),
    }
    outcome
}

fn pick<'a>(
    flights: &'a [CharterFlight],
    wish: &CharterBookingWish,
) -> Result<&'a CharterFlight, ResolveFailure> {
    if flights.is_empty() {
        return Err(ResolveFailure::NoFlights);
    }

    let from = wish.from.trim();
    let to = wish.to.trim();
    let on_route: Vec<&CharterFlight> = flights.iter().filter(|f| f.serves(from, to)).collect();
    if on_route.is_empty() {
        return Err(ResolveFailure::RouteNotFound);
    }

    let (Some(departure), Some(back)) = (
        parse_calendar_date(&wish.date_from),
        parse_calendar_date(&wish.date_to),
    ) else {
        return Err(ResolveFailure::InvalidDate);
    };

    on_route
        .into_iter()
        .find(|f| f.operates_on(departure) && f.operates_on(back))
        .ok_or(ResolveFailure::DatesNotSupported)
}

/// Wire form of a resolve result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ResolveOutcome {
    Resolved { ok: bool, flight: CharterFlight },
    Failed { ok: bool, reason: ResolveFailure },
}

impl From<Result<&CharterFlight, ResolveFailure>> for ResolveOutcome {
    fn from(result: Result<&CharterFlight, ResolveFailure>) -> Self {
        match result {
            Ok(flight) => ResolveOutcome::Resolved {
                ok: true,
                flight: flight.clone(),
            },
            Err(reason) => ResolveOutcome::Failed { ok: false, reason },
        }
    }
}
