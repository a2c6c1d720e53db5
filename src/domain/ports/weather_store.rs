use crate::domain::entities::favorite::Favorite;
use crate::domain::entities::forecast::SubregionForecast;
use crate::domain::entities::snapshot::Snapshot;
use crate::domain::error::DomainError;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct StoreStats {
    pub favorite_count: usize,
    pub snapshot_count: usize,
    pub per_region: Vec<(String, usize)>,
    pub oldest_fetch: Option<DateTime<Utc>>,
    pub newest_fetch: Option<DateTime<Utc>>,
}

/// Favorites and snapshot history. Each call is transactional on its own; there
/// is no held connection state visible to callers.
pub trait WeatherStore: Send + Sync {
    /// Favorites in insertion order.
    fn list_favorites(&self) -> Result<Vec<Favorite>, DomainError>;

    /// Idempotent: adding an existing name changes nothing, including its position.
    fn add_favorite(&self, name: &str, code: &str) -> Result<(), DomainError>;

    fn remove_favorite(&self, name: &str) -> Result<(), DomainError>;

    /// Always appends a new history row; existing rows are never overwritten.
    /// `fetched_at` defaults to now when absent.
    fn save_snapshot(
        &self,
        region: &str,
        subregions: &[SubregionForecast],
        fetched_at: Option<DateTime<Utc>>,
    ) -> Result<(), DomainError>;

    /// Most recent snapshot for a region by fetch time, if any.
    fn latest_snapshot(&self, region: &str) -> Result<Option<Snapshot>, DomainError>;

    /// Up to `limit` snapshots for a region, newest fetch first.
    fn history(&self, region: &str, limit: usize) -> Result<Vec<Snapshot>, DomainError>;

    /// Delete snapshots fetched before the cutoff; returns the number deleted.
    fn purge_older_than(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError>;

    fn stats(&self) -> Result<StoreStats, DomainError>;
}
