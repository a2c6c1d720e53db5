//! Region registry: name/code mapping, startup load chain and search.

use crate::domain::ports::forecast_source::ForecastSource;
use crate::domain::ports::registry_cache::RegistryCache;
use crate::domain::upstream::RegistryDocument;
use std::collections::HashMap;

/// Hardcoded last-resort pairs; the load chain guarantees a non-empty registry
/// even with no cache file and no network.
const FALLBACK_REGIONS: &[(&str, &str)] = &[
    ("130000", "東京都"),
    ("270000", "大阪府"),
    ("016000", "札幌"),
    ("471000", "沖縄"),
];

/// Bidirectional region name/code mapping, immutable once loaded.
pub struct RegionRegistry {
    names: Vec<String>,
    name_to_code: HashMap<String, String>,
    code_to_name: HashMap<String, String>,
}

impl RegionRegistry {
    pub fn from_document(doc: &RegistryDocument) -> Self {
        let mut names = Vec::with_capacity(doc.offices.len());
        let mut name_to_code = HashMap::new();
        let mut code_to_name = HashMap::new();
        for (code, office) in &doc.offices {
            names.push(office.name.clone());
            name_to_code.insert(office.name.clone(), code.clone());
            code_to_name.insert(code.clone(), office.name.clone());
        }
        Self {
            names,
            name_to_code,
            code_to_name,
        }
    }

    pub fn fallback() -> Self {
        let mut names = Vec::with_capacity(FALLBACK_REGIONS.len());
        let mut name_to_code = HashMap::new();
        let mut code_to_name = HashMap::new();
        for (code, name) in FALLBACK_REGIONS {
            names.push(name.to_string());
            name_to_code.insert(name.to_string(), code.to_string());
            code_to_name.insert(code.to_string(), name.to_string());
        }
        Self {
            names,
            name_to_code,
            code_to_name,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn code_for(&self, name: &str) -> Option<&str> {
        self.name_to_code.get(name).map(String::as_str)
    }

    pub fn name_for(&self, code: &str) -> Option<&str> {
        self.code_to_name.get(code).map(String::as_str)
    }

    /// Exact-substring containment over display names, script-sensitive. The
    /// primary interactive search mode.
    pub fn search(&self, keyword: &str) -> Vec<String> {
        self.names
            .iter()
            .filter(|n| n.contains(keyword))
            .cloned()
            .collect()
    }

    /// Fuzzy best-match ranking, capped at `n` results with a minimum similarity
    /// `cutoff`. Fallback matching mode for keywords that substring search misses.
    pub fn closest(&self, keyword: &str, n: usize, cutoff: f64) -> Vec<String> {
        let mut scored: Vec<(f64, &String)> = self
            .names
            .iter()
            .map(|name| (similarity(keyword, name), name))
            .filter(|(score, _)| *score >= cutoff)
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().take(n).map(|(_, n)| n.clone()).collect()
    }
}

/// Character-level similarity ratio in [0, 1]: twice the longest common
/// subsequence over the combined length. Region names are a handful of
/// characters, so the quadratic table is irrelevant.
fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let mut row = vec![0usize; b.len() + 1];
    for ca in &a {
        let mut prev_diag = 0;
        for (j, cb) in b.iter().enumerate() {
            let tmp = row[j + 1];
            row[j + 1] = if ca == cb {
                prev_diag + 1
            } else {
                row[j + 1].max(row[j])
            };
            prev_diag = tmp;
        }
    }
    let lcs = row[b.len()];
    (2.0 * lcs as f64) / ((a.len() + b.len()) as f64)
}

/// Startup load chain: local cache, then remote (write-through on success), then
/// the hardcoded fallback pairs. Never fails outward; every downgrade is logged.
pub async fn load_registry(source: &dyn ForecastSource, cache: &dyn RegistryCache) -> RegionRegistry {
    match cache.read() {
        Ok(doc) if !doc.offices.is_empty() => {
            tracing::debug!(regions = doc.offices.len(), "region registry loaded from local cache");
            return RegionRegistry::from_document(&doc);
        }
        Ok(_) => tracing::warn!("local registry cache is empty, trying remote"),
        Err(e) => tracing::debug!("local registry cache unavailable: {e}"),
    }

    match source.fetch_registry().await {
        Ok(doc) if !doc.offices.is_empty() => {
            if let Err(e) = cache.write(&doc) {
                tracing::warn!("failed to persist registry cache: {e}");
            }
            tracing::info!(regions = doc.offices.len(), "region registry downloaded");
            return RegionRegistry::from_document(&doc);
        }
        Ok(_) => tracing::warn!("remote registry returned no offices"),
        Err(e) => tracing::warn!("remote registry fetch failed: {e}"),
    }

    tracing::warn!("using hardcoded fallback region registry");
    RegionRegistry::fallback()
}
