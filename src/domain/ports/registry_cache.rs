use crate::domain::error::DomainError;
use crate::domain::upstream::RegistryDocument;

/// Local mirror of the region registry, read before the network is tried and
/// written through after a successful remote fetch.
pub trait RegistryCache: Send + Sync {
    fn read(&self) -> Result<RegistryDocument, DomainError>;
    fn write(&self, doc: &RegistryDocument) -> Result<(), DomainError>;
}
