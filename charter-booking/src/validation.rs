use serde::{Deserialize, Serialize};

use crate::models::BookingRequest;

/// Limits applied to booking form submissions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRules {
    pub max_passengers: u32,
}

impl Default for BookingRules {
    fn default() -> Self {
        Self { max_passengers: 9 }
    }
}

/// Checks the form fields the resolver does not look at.
///
/// Returns every problem found, not only the first one.
pub fn validate_request(request: &BookingRequest, rules: &BookingRules) -> Result<(), Vec<String>> {
    let mut problems = Vec::new();

    if request.wish.from.trim().is_empty() {
        problems.push("departure point is required".to_string());
    }
    if request.wish.to.trim().is_empty() {
        problems.push("destination is required".to_string());
    }

    let pax = &request.passengers;
    if pax.adults < 1 {
        problems.push("at least one adult passenger is required".to_string());
    }
    if pax.infants > pax.adults {
        problems.push("each infant must travel with an adult".to_string());
    }
    if pax.total() > u64::from(rules.max_passengers) {
        problems.push(format!("no more than {} passengers per booking", rules.max_passengers));
    }

    if request.contact.name.trim().is_empty() {
        problems.push("contact name is required".to_string());
    }
    let email = request.contact.email.expose().trim();
    if email.is_empty() || !email.contains('@') {
        problems.push("contact email is not valid".to_string());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactInfo, Passengers};
    use charter_core::CharterBookingWish;
    use charter_shared::pii::Masked;

    fn request(passengers: Passengers) -> BookingRequest {
        BookingRequest {
            wish: CharterBookingWish::new("MOW", "DXB", "2024-06-03", "2024-06-05"),
            passengers,
            contact: ContactInfo {
                name: "Ivan Petrov".to_string(),
                email: Masked::new("ivan@example.com".to_string()),
                phone: None,
            },
            comment: None,
        }
    }

    #[test]
    fn test_valid_request() {
        let req = request(Passengers { adults: 2, children: 1, infants: 1 });
        assert!(validate_request(&req, &BookingRules::default()).is_ok());
    }

    #[test]
    fn test_passenger_rules() {
        let rules = BookingRules::default();

        let no_adults = request(Passengers { adults: 0, children: 2, infants: 0 });
        assert!(validate_request(&no_adults, &rules).is_err());

        let too_many_infants = request(Passengers { adults: 1, children: 0, infants: 2 });
        assert!(validate_request(&too_many_infants, &rules).is_err());

        let crowd = request(Passengers { adults: 8, children: 2, infants: 0 });
        assert!(validate_request(&crowd, &rules).is_err());
        assert!(validate_request(&crowd, &BookingRules { max_passengers: 10 }).is_ok());
    }

    #[test]
    fn test_huge_passenger_counts_rejected() {
        let rules = BookingRules { max_passengers: u32::MAX };

        let req = request(Passengers { adults: u32::MAX, children: 1, infants: 0 });
        let problems = validate_request(&req, &rules).unwrap_err();
        assert_eq!(problems, vec![format!("no more than {} passengers per booking", u32::MAX)]);

        let req = request(Passengers { adults: u32::MAX, children: u32::MAX, infants: u32::MAX });
        assert!(validate_request(&req, &rules).is_err());
        assert_eq!(req.passengers.total(), 3 * u64::from(u32::MAX));
    }

    #[test]
    fn test_collects_all_problems() {
        let mut req = request(Passengers { adults: 0, children: 0, infants: 0 });
        req.wish.from = "  ".to_string();
        req.contact.email = Masked::new("nope".to_string());
        let problems = validate_request(&req, &BookingRules::default()).unwrap_err();
        assert_eq!(problems.len(), 3);
    }
}
