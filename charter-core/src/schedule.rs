use std::collections::{BTreeSet, HashSet};

use chrono::{Days, NaiveDate};

use crate::flight::{CharterFlight, Route};
use crate::{CoreError, CoreResult};

/// Longest window `operating_dates` will expand
pub const MAX_WINDOW_DAYS: i64 = 366;

/// Distinct routes in first-seen catalog order
pub fn routes(flights: &[CharterFlight]) -> Vec<Route> {
    let mut seen = HashSet::new();
    flights
        .iter()
        .map(CharterFlight::route)
        .filter(|route| seen.insert(route.clone()))
        .collect()
}

/// Dates in `[start, end]` on which at least one flight of the route departs.
pub fn operating_dates(
    flights: &[CharterFlight],
    from: &str,
    to: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> CoreResult<Vec<NaiveDate>> {
    if end < start {
        return Ok(Vec::new());
    }
    let span = (end - start).num_days();
    if span > MAX_WINDOW_DAYS {
        return Err(CoreError::Validation(format!(
            "date window of {} days exceeds the {} day limit",
            span, MAX_WINDOW_DAYS
        )));
    }

    let on_route: Vec<&CharterFlight> = flights
        .iter()
        .filter(|f| f.serves(from.trim(), to.trim()))
        .collect();

    let mut dates = BTreeSet::new();
    let mut day = start;
    while day <= end {
        if on_route.iter().any(|f| f.operates_on(day)) {
            dates.insert(day);
        }
        match day.checked_add_days(Days::new(1)) {
            Some(next) => day = next,
            None => break,
        }
    }

    Ok(dates.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn catalog() -> Vec<CharterFlight> {
        vec![
            CharterFlight::new("MOW", "DXB", "2024-06-01", "2024-06-30", vec![1, 3, 5]),
            CharterFlight::new("MOW", "AYT", "2024-06-01", "2024-09-30", vec![6]),
            CharterFlight::new("MOW", "DXB", "2024-07-01", "2024-07-31", vec![7]),
            CharterFlight::new("DXB", "MOW", "2024-06-01", "2024-06-30", vec![2]),
        ]
    }

    #[test]
    fn test_routes_distinct_in_order() {
        let routes = routes(&catalog());
        let pairs: Vec<(&str, &str)> = routes.iter().map(|r| (r.from.as_str(), r.to.as_str())).collect();
        assert_eq!(pairs, vec![("MOW", "DXB"), ("MOW", "AYT"), ("DXB", "MOW")]);
    }

    #[test]
    fn test_operating_dates_first_week_of_june() {
        let dates = operating_dates(&catalog(), "MOW", "DXB", ymd(2024, 6, 1), ymd(2024, 6, 9)).unwrap();
        // Mon 3, Wed 5, Fri 7
        assert_eq!(dates, vec![ymd(2024, 6, 3), ymd(2024, 6, 5), ymd(2024, 6, 7)]);
    }

    #[test]
    fn test_operating_dates_merge_flights() {
        let dates = operating_dates(&catalog(), "MOW", "DXB", ymd(2024, 6, 28), ymd(2024, 7, 7)).unwrap();
        // Fri 28 June from the first flight, Sundays 7 July from the second
        assert_eq!(dates, vec![ymd(2024, 6, 28), ymd(2024, 7, 7)]);
    }

    #[test]
    fn test_operating_dates_inverted_window() {
        let dates = operating_dates(&catalog(), "MOW", "DXB", ymd(2024, 6, 9), ymd(2024, 6, 1)).unwrap();
        assert!(dates.is_empty());
    }

    #[test]
    fn test_operating_dates_rejects_huge_window() {
        let result = operating_dates(&catalog(), "MOW", "DXB", ymd(2024, 1, 1), ymd(2026, 1, 1));
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_operating_dates_unknown_route() {
        let dates = operating_dates(&catalog(), "LED", "DXB", ymd(2024, 6, 1), ymd(2024, 6, 30)).unwrap();
        assert!(dates.is_empty());
    }
}
