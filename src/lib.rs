pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::favorites::FavoritesUseCase;
use crate::application::fetch::{FetchForecastUseCase, FetchOutcome};
use crate::application::history::HistoryUseCase;
use crate::application::registry::{load_registry, RegionRegistry};
use crate::domain::entities::favorite::Favorite;
use crate::domain::entities::snapshot::Snapshot;
use crate::domain::error::DomainError;
use crate::domain::ports::forecast_source::ForecastSource;
use crate::domain::ports::registry_cache::RegistryCache;
use crate::domain::ports::weather_store::{StoreStats, WeatherStore};
use crate::infrastructure::http::jma::JmaClient;
use crate::infrastructure::registry_cache::RegistryCacheFile;
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::weather_store::SqliteWeatherStore;
use rusqlite::Connection;
use std::sync::Arc;

/// Fuzzy search defaults matching the interactive search UI's fallback mode.
const FUZZY_LIMIT: usize = 5;
const FUZZY_CUTOFF: f64 = 0.2;

pub struct WeatherDesk {
    registry: RegionRegistry,
    fetch_uc: FetchForecastUseCase,
    favorites_uc: FavoritesUseCase,
    history_uc: HistoryUseCase,
}

impl WeatherDesk {
    /// Open against the live JMA endpoints and a registry cache file on disk.
    pub async fn open(db_path: &str, cache_path: &str) -> Result<Self, DomainError> {
        let source: Arc<dyn ForecastSource> = Arc::new(JmaClient::new());
        let cache = RegistryCacheFile::new(cache_path);
        Self::with_parts(db_path, source, &cache).await
    }

    /// Wire explicit collaborators; tests use this with an in-memory database
    /// and a stub source.
    pub async fn with_parts(
        db_path: &str,
        source: Arc<dyn ForecastSource>,
        cache: &dyn RegistryCache,
    ) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
        run_migrations(&conn)?;
        let store: Arc<dyn WeatherStore> = Arc::new(SqliteWeatherStore::new(conn));

        // One-shot at startup; never fails outward.
        let registry = load_registry(source.as_ref(), cache).await;

        Ok(Self {
            registry,
            fetch_uc: FetchForecastUseCase::new(source, store.clone()),
            favorites_uc: FavoritesUseCase::new(store.clone()),
            history_uc: HistoryUseCase::new(store),
        })
    }

    // Registry

    pub fn regions(&self) -> &[String] {
        self.registry.names()
    }

    pub fn region_code(&self, name: &str) -> Option<&str> {
        self.registry.code_for(name)
    }

    pub fn search(&self, keyword: &str) -> Vec<String> {
        self.registry.search(keyword)
    }

    pub fn search_fuzzy(&self, keyword: &str) -> Vec<String> {
        self.registry.closest(keyword, FUZZY_LIMIT, FUZZY_CUTOFF)
    }

    // Forecast access

    /// Session cache, then network (persisting a snapshot on success), then the
    /// snapshot history. `NoData` when everything misses.
    pub async fn forecast(&self, region: &str) -> Result<FetchOutcome, DomainError> {
        let code = self.registry.code_for(region);
        self.fetch_uc.forecast(region, code).await
    }

    // Favorites

    pub fn favorites(&self) -> Result<Vec<Favorite>, DomainError> {
        self.favorites_uc.list()
    }

    pub fn add_favorite(&self, region: &str) -> Result<(), DomainError> {
        let code = self.registry.code_for(region).unwrap_or("");
        self.favorites_uc.add(region, code)
    }

    pub fn remove_favorite(&self, region: &str) -> Result<(), DomainError> {
        self.favorites_uc.remove(region)
    }

    // History

    pub fn history(&self, region: &str, limit: usize) -> Result<Vec<Snapshot>, DomainError> {
        self.history_uc.history(region, limit)
    }

    pub fn latest_snapshot(&self, region: &str) -> Result<Option<Snapshot>, DomainError> {
        self.history_uc.latest(region)
    }

    pub fn purge(&self, days: i64) -> Result<usize, DomainError> {
        self.history_uc.purge_older_than_days(days)
    }

    pub fn stats(&self) -> Result<StoreStats, DomainError> {
        self.history_uc.stats()
    }
}
