use crate::domain::error::DomainError;
use crate::domain::upstream::{RegistryDocument, Report};
use async_trait::async_trait;

/// Upstream document provider. The production implementation talks to the JMA
/// bosai endpoints; tests substitute canned documents.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// Fetch the region registry (name/code pairs for every office).
    async fn fetch_registry(&self) -> Result<RegistryDocument, DomainError>;

    /// Fetch the forecast document for one region code.
    async fn fetch_forecast(&self, region_code: &str) -> Result<Vec<Report>, DomainError>;
}
