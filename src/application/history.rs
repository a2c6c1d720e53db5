use crate::domain::entities::snapshot::Snapshot;
use crate::domain::error::DomainError;
use crate::domain::ports::weather_store::{StoreStats, WeatherStore};
use chrono::{Duration, Utc};
use std::sync::Arc;

pub struct HistoryUseCase {
    store: Arc<dyn WeatherStore>,
}

impl HistoryUseCase {
    pub fn new(store: Arc<dyn WeatherStore>) -> Self {
        Self { store }
    }

    pub fn history(&self, region: &str, limit: usize) -> Result<Vec<Snapshot>, DomainError> {
        self.store.history(region, limit)
    }

    pub fn latest(&self, region: &str) -> Result<Option<Snapshot>, DomainError> {
        self.store.latest_snapshot(region)
    }

    /// Drop snapshots fetched more than `days` days ago; returns the delete count.
    pub fn purge_older_than_days(&self, days: i64) -> Result<usize, DomainError> {
        if days < 0 {
            return Err(DomainError::InvalidInput(format!(
                "retention days must be non-negative, got {days}"
            )));
        }
        let cutoff = Utc::now() - Duration::days(days);
        self.store.purge_older_than(cutoff)
    }

    pub fn stats(&self) -> Result<StoreStats, DomainError> {
        self.store.stats()
    }
}
