use charter_core::CharterFlight;
use uuid::Uuid;

struct SeedFlight {
    id: u128,
    flight_number: &'static str,
    carrier: &'static str,
    from: &'static str,
    to: &'static str,
    date_from: &'static str,
    date_to: &'static str,
    week_days: &'static [u8],
    price_amount: i32,
    seats: u32,
}

const DEMO_SCHEDULE: &[SeedFlight] = &[
    SeedFlight {
        id: 0x0001,
        flight_number: "CH-101",
        carrier: "Azur Air",
        from: "MOW",
        to: "DXB",
        date_from: "2026-06-01T00:00:00.000Z",
        date_to: "2027-05-31T00:00:00.000Z",
        week_days: &[1, 3, 5],
        price_amount: 42_500,
        seats: 180,
    },
    SeedFlight {
        id: 0x0002,
        flight_number: "CH-102",
        carrier: "Azur Air",
        from: "DXB",
        to: "MOW",
        date_from: "2026-06-01",
        date_to: "2027-05-31",
        week_days: &[2, 4, 6],
        price_amount: 41_000,
        seats: 180,
    },
    SeedFlight {
        id: 0x0003,
        flight_number: "CH-210",
        carrier: "Pegas Fly",
        from: "MOW",
        to: "AYT",
        date_from: "2026-05-01",
        date_to: "2026-10-31",
        week_days: &[1, 2, 3, 4, 5, 6, 7],
        price_amount: 31_900,
        seats: 220,
    },
    SeedFlight {
        id: 0x0004,
        flight_number: "CH-214",
        carrier: "Nordwind",
        from: "LED",
        to: "AYT",
        date_from: "2026-05-15",
        date_to: "2026-10-15",
        week_days: &[6, 7],
        price_amount: 33_400,
        seats: 189,
    },
    SeedFlight {
        id: 0x0005,
        flight_number: "CH-330",
        carrier: "Red Wings",
        from: "MOW",
        to: "HRG",
        date_from: "2026-09-01",
        date_to: "2027-04-30",
        week_days: &[2, 5],
        price_amount: 38_700,
        seats: 160,
    },
    SeedFlight {
        id: 0x0006,
        flight_number: "CH-331",
        carrier: "Red Wings",
        from: "HRG",
        to: "MOW",
        date_from: "2026-09-01",
        date_to: "2027-04-30",
        week_days: &[2, 5],
        price_amount: 37_900,
        seats: 160,
    },
];

/// Stable id of the n-th demo flight (1-based)
pub fn demo_flight_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

pub fn demo_flights() -> Vec<CharterFlight> {
    DEMO_SCHEDULE
        .iter()
        .map(|seed| CharterFlight {
            id: demo_flight_id(seed.id),
            flight_number: seed.flight_number.to_string(),
            carrier: seed.carrier.to_string(),
            from: seed.from.to_string(),
            to: seed.to.to_string(),
            date_from: seed.date_from.to_string(),
            date_to: seed.date_to.to_string(),
            week_days: seed.week_days.to_vec(),
            price_amount: seed.price_amount,
            price_currency: "RUB".to_string(),
            seats: seed.seats,
        })
        .collect()
}
