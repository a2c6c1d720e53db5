use crate::domain::entities::forecast::SubregionForecast;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted copy of a region's normalized forecast. Rows are append-only;
/// "latest" is resolved by `fetched_at` ordering at read time, never by overwrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub region: String,
    pub subregions: Vec<SubregionForecast>,
    pub fetched_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
