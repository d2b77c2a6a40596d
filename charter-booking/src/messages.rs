use charter_core::ResolveFailure;

/// Text shown to the client when a wish cannot be booked
pub fn user_message(reason: ResolveFailure) -> &'static str {
    match reason {
        ResolveFailure::NoFlights => "There are no charter flights on sale right now. Please try again later.",
        ResolveFailure::RouteNotFound => {
            "We do not fly this route. Please pick another departure point or destination."
        }
        ResolveFailure::DatesNotSupported => {
            "There is no flight on the selected dates. Please choose dates from the flight schedule."
        }
        ResolveFailure::InvalidDate => "Please enter valid departure and return dates.",
    }
}
