//! Shared test helpers.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tenki::domain::entities::forecast::{ForecastEntry, SubregionForecast, WeatherKind};
use tenki::domain::error::DomainError;
use tenki::domain::ports::forecast_source::ForecastSource;
use tenki::domain::upstream::{Office, RegistryDocument, Report};
use tenki::infrastructure::registry_cache::RegistryCacheFile;
use tenki::WeatherDesk;

/// Canned upstream source. `reports` is swappable mid-test to simulate the
/// network dropping between sessions.
pub struct StubSource {
    registry: Option<RegistryDocument>,
    reports: Mutex<Option<Vec<Report>>>,
    forecast_calls: AtomicUsize,
}

impl StubSource {
    pub fn offline() -> Self {
        Self {
            registry: None,
            reports: Mutex::new(None),
            forecast_calls: AtomicUsize::new(0),
        }
    }

    pub fn online(reports: Vec<Report>) -> Self {
        Self {
            registry: Some(small_registry()),
            reports: Mutex::new(Some(reports)),
            forecast_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_registry(registry: RegistryDocument) -> Self {
        Self {
            registry: Some(registry),
            reports: Mutex::new(None),
            forecast_calls: AtomicUsize::new(0),
        }
    }

    pub fn set_reports(&self, reports: Option<Vec<Report>>) {
        *self.reports.lock().unwrap() = reports;
    }

    pub fn forecast_calls(&self) -> usize {
        self.forecast_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ForecastSource for StubSource {
    async fn fetch_registry(&self) -> Result<RegistryDocument, DomainError> {
        self.registry
            .clone()
            .ok_or_else(|| DomainError::Network("stub offline".into()))
    }

    async fn fetch_forecast(&self, _region_code: &str) -> Result<Vec<Report>, DomainError> {
        self.forecast_calls.fetch_add(1, Ordering::SeqCst);
        self.reports
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| DomainError::Network("stub offline".into()))
    }
}

pub fn registry_of(pairs: &[(&str, &str)]) -> RegistryDocument {
    let mut offices = BTreeMap::new();
    for (code, name) in pairs {
        offices.insert(
            code.to_string(),
            Office {
                name: name.to_string(),
            },
        );
    }
    RegistryDocument { offices }
}

pub fn small_registry() -> RegistryDocument {
    registry_of(&[("130000", "東京都"), ("270000", "大阪府")])
}

/// Tokyo forecast document in the upstream two-report shape: short-range report
/// with a temps series, weekly report with weather codes and a min/max series
/// whose day-0 values are blank (forcing the short-term fallback).
pub fn tokyo_reports() -> Vec<Report> {
    serde_json::from_value(serde_json::json!([
        {
            "timeSeries": [
                {
                    "timeDefines": ["2026-08-23T11:00:00+09:00", "2026-08-24T11:00:00+09:00"],
                    "areas": [
                        {
                            "area": {"name": "東京地方", "code": "130010"},
                            "weatherCodes": ["200", "101"]
                        }
                    ]
                },
                {
                    "timeDefines": ["2026-08-23T00:00:00+09:00", "2026-08-23T09:00:00+09:00"],
                    "areas": [
                        {"area": {"name": "東京", "code": "44132"}, "temps": ["27", "33"]}
                    ]
                }
            ]
        },
        {
            "timeSeries": [
                {
                    "timeDefines": [
                        "2026-08-23T00:00:00+09:00",
                        "2026-08-24T00:00:00+09:00",
                        "2026-08-25T00:00:00+09:00",
                        "2026-08-26T00:00:00+09:00",
                        "2026-08-27T00:00:00+09:00",
                        "2026-08-28T00:00:00+09:00",
                        "2026-08-29T00:00:00+09:00"
                    ],
                    "areas": [
                        {
                            "area": {"name": "東京地方", "code": "130010"},
                            "weatherCodes": ["101", "201", "202", "200", "101", "100", "201"]
                        }
                    ]
                },
                {
                    "areas": [
                        {
                            "area": {"name": "東京", "code": "44132"},
                            "tempsMin": ["", "24", "23", "24", "24", "25", "24"],
                            "tempsMax": ["", "33", "32", "33", "34", "34", "33"]
                        }
                    ]
                }
            ]
        }
    ]))
    .unwrap()
}

/// A weekly report whose series never carry weather codes; normalizes to nothing.
pub fn codeless_reports() -> Vec<Report> {
    serde_json::from_value(serde_json::json!([
        {
            "timeSeries": [
                {
                    "timeDefines": ["2026-08-23T00:00:00+09:00"],
                    "areas": [
                        {"area": {"name": "東京", "code": "44132"}, "temps": ["27"]}
                    ]
                }
            ]
        }
    ]))
    .unwrap()
}

pub fn sample_subregions() -> Vec<SubregionForecast> {
    vec![SubregionForecast {
        name: "伊豆諸島北部".into(),
        entries: vec![
            ForecastEntry {
                day: "8/23".into(),
                kind: WeatherKind::Clear,
                status: "晴れ".into(),
                temp: "24-31°C".into(),
            },
            ForecastEntry {
                day: "8/24".into(),
                kind: WeatherKind::Rain,
                status: "雨".into(),
                temp: "--".into(),
            },
        ],
    }]
}

pub async fn desk_with(
    source: Arc<StubSource>,
    db_path: &str,
    dir: &tempfile::TempDir,
) -> WeatherDesk {
    let cache = RegistryCacheFile::new(dir.path().join("area.json"));
    WeatherDesk::with_parts(db_path, source, &cache)
        .await
        .unwrap()
}

pub async fn setup(source: Arc<StubSource>) -> (WeatherDesk, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let desk = desk_with(source, ":memory:", &dir).await;
    (desk, dir)
}
