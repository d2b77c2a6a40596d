use async_trait::async_trait;
use uuid::Uuid;

use crate::flight::CharterFlight;

/// Source of the charter flight catalog
#[async_trait]
pub trait CharterFlightRepository: Send + Sync {
    /// Snapshot of every flight in catalog order
    async fn list_flights(&self) -> Result<Vec<CharterFlight>, Box<dyn std::error::Error + Send + Sync>>;

    async fn get_flight(
        &self,
        id: Uuid,
    ) -> Result<Option<CharterFlight>, Box<dyn std::error::Error + Send + Sync>>;
}
