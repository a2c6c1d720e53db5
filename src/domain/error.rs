use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Registry load failed: {0}")]
    RegistryLoad(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("No forecast data available for {0}")]
    NoData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    /// True for the state the UI presents as "no data, retry" rather than a hard error.
    pub fn is_no_data(&self) -> bool {
        matches!(self, DomainError::NoData(_))
    }
}
