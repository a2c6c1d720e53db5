//! Network-first forecast access with session cache and snapshot fallback.

use crate::application::normalize::normalize;
use crate::domain::entities::forecast::SubregionForecast;
use crate::domain::error::DomainError;
use crate::domain::ports::forecast_source::ForecastSource;
use crate::domain::ports::weather_store::WeatherStore;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Where a forecast came from. `Cached` carries the fetch time of the snapshot
/// that answered, so the caller can show how stale the data is.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastOrigin {
    /// Fresh from the network this call.
    Online,
    /// Already resolved earlier in this session; no fetch was attempted.
    Session,
    /// Served from the persisted snapshot history.
    Cached(DateTime<Utc>),
}

#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub subregions: Vec<SubregionForecast>,
    pub origin: ForecastOrigin,
}

/// Per-session forecast cache keyed by region name. An explicit object owned by
/// the use case, handed to callers by reference — no ambient globals.
#[derive(Default)]
pub struct ForecastCache {
    inner: Mutex<HashMap<String, Vec<SubregionForecast>>>,
}

impl ForecastCache {
    fn get(&self, region: &str) -> Option<Vec<SubregionForecast>> {
        self.inner.lock().ok()?.get(region).cloned()
    }

    fn put(&self, region: &str, subregions: Vec<SubregionForecast>) {
        if let Ok(mut map) = self.inner.lock() {
            map.insert(region.to_string(), subregions);
        }
    }
}

pub struct FetchForecastUseCase {
    source: Arc<dyn ForecastSource>,
    store: Arc<dyn WeatherStore>,
    cache: ForecastCache,
}

impl FetchForecastUseCase {
    pub fn new(source: Arc<dyn ForecastSource>, store: Arc<dyn WeatherStore>) -> Self {
        Self {
            source,
            store,
            cache: ForecastCache::default(),
        }
    }

    /// Resolve a region's forecast. A region already in the session cache never
    /// refetches (the baseline staleness tradeoff); otherwise: network fetch,
    /// then latest persisted snapshot, then `NoData`. `code` is `None` for a
    /// region the registry cannot resolve, which skips straight to the snapshot
    /// fallback.
    pub async fn forecast(
        &self,
        name: &str,
        code: Option<&str>,
    ) -> Result<FetchOutcome, DomainError> {
        if let Some(subregions) = self.cache.get(name) {
            return Ok(FetchOutcome {
                subregions,
                origin: ForecastOrigin::Session,
            });
        }

        if let Some(code) = code {
            match self.fetch_fresh(code).await {
                // An empty normalization is no more useful than a failed fetch;
                // both fall through to the snapshot history.
                Ok(subregions) if !subregions.is_empty() => {
                    self.store.save_snapshot(name, &subregions, None)?;
                    self.cache.put(name, subregions.clone());
                    return Ok(FetchOutcome {
                        subregions,
                        origin: ForecastOrigin::Online,
                    });
                }
                Ok(_) => {
                    tracing::warn!(region = name, "fetched document normalized to nothing, trying snapshots");
                }
                Err(e) => {
                    tracing::warn!(region = name, "forecast fetch failed ({e}), trying snapshots");
                }
            }
        } else {
            tracing::warn!(region = name, "no registry code, trying snapshots");
        }

        match self.store.latest_snapshot(name)? {
            Some(snapshot) => {
                self.cache.put(name, snapshot.subregions.clone());
                Ok(FetchOutcome {
                    subregions: snapshot.subregions,
                    origin: ForecastOrigin::Cached(snapshot.fetched_at),
                })
            }
            None => Err(DomainError::NoData(name.to_string())),
        }
    }

    async fn fetch_fresh(&self, code: &str) -> Result<Vec<SubregionForecast>, DomainError> {
        let reports = self.source.fetch_forecast(code).await?;
        Ok(normalize(&reports))
    }
}
