use async_trait::async_trait;
use charter_core::{CharterFlight, CharterFlightRepository};
use uuid::Uuid;

/// In-memory charter catalog. Order of insertion is the catalog order the
/// resolver sees.
#[derive(Debug, Clone, Default)]
pub struct CharterCatalog {
    flights: Vec<CharterFlight>,
}

impl CharterCatalog {
    pub fn new() -> Self {
        Self { flights: Vec::new() }
    }

    pub fn with_flights(flights: Vec<CharterFlight>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for flight in flights {
            catalog.insert(flight)?;
        }
        Ok(catalog)
    }

    /// Catalog with the built-in demo schedule
    pub fn seeded() -> Self {
        Self {
            flights: crate::seed::demo_flights(),
        }
    }

    /// Append a flight to the end of the catalog
    pub fn insert(&mut self, flight: CharterFlight) -> Result<(), CatalogError> {
        if self.flights.iter().any(|f| f.id == flight.id) {
            return Err(CatalogError::Duplicate(flight.id.to_string()));
        }
        if flight.validity_window().is_none() {
            tracing::warn!(
                flight_id = %flight.id,
                date_from = %flight.date_from,
                date_to = %flight.date_to,
                "Catalog flight has an unparseable validity window and will never match"
            );
        }
        self.flights.push(flight);
        Ok(())
    }

    pub fn get(&self, id: &Uuid) -> Option<&CharterFlight> {
        self.flights.iter().find(|f| &f.id == id)
    }

    pub fn all(&self) -> &[CharterFlight] {
        &self.flights
    }

    pub fn by_route(&self, from: &str, to: &str) -> Vec<&CharterFlight> {
        self.flights.iter().filter(|f| f.serves(from, to)).collect()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

#[async_trait]
impl CharterFlightRepository for CharterCatalog {
    async fn list_flights(&self) -> Result<Vec<CharterFlight>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.flights.clone())
    }

    async fn get_flight(
        &self,
        id: Uuid,
    ) -> Result<Option<CharterFlight>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.get(&id).cloned())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Flight already in catalog: {0}")]
    Duplicate(String),
}
