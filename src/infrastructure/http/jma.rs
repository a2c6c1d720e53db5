use crate::domain::error::DomainError;
use crate::domain::ports::forecast_source::ForecastSource;
use crate::domain::upstream::{RegistryDocument, Report};
use async_trait::async_trait;
use std::time::Duration;

const DEFAULT_BASE: &str = "https://www.jma.go.jp/bosai";

/// Forecast documents are small; keep their timeout tighter than the registry's
/// since they block the interactive path.
const FORECAST_TIMEOUT: Duration = Duration::from_secs(5);
const REGISTRY_TIMEOUT: Duration = Duration::from_secs(10);

/// JMA bosai API client.
pub struct JmaClient {
    base: String,
    client: reqwest::Client,
}

impl JmaClient {
    pub fn new() -> Self {
        Self::with_base(DEFAULT_BASE.into())
    }

    pub fn with_base(base: String) -> Self {
        Self {
            base,
            client: reqwest::Client::builder()
                .user_agent("tenki/0.1")
                .timeout(REGISTRY_TIMEOUT)
                .build()
                .unwrap_or_default(),
        }
    }

    fn registry_url(&self) -> String {
        format!("{}/common/const/area.json", self.base)
    }

    fn forecast_url(&self, region_code: &str) -> String {
        format!("{}/forecast/data/forecast/{}.json", self.base, region_code)
    }
}

impl Default for JmaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ForecastSource for JmaClient {
    async fn fetch_registry(&self) -> Result<RegistryDocument, DomainError> {
        let resp = self
            .client
            .get(self.registry_url())
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DomainError::Network(format!(
                "registry endpoint returned {}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| DomainError::Parse(format!("registry document: {e}")))
    }

    async fn fetch_forecast(&self, region_code: &str) -> Result<Vec<Report>, DomainError> {
        let resp = self
            .client
            .get(self.forecast_url(region_code))
            .timeout(FORECAST_TIMEOUT)
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DomainError::Network(format!(
                "forecast endpoint returned {} for {region_code}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| DomainError::Parse(format!("forecast document: {e}")))
    }
}
