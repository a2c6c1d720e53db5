//! Typed view of the JMA bosai documents. Field presence is validated once at
//! deserialization; everything downstream works on these shapes instead of poking
//! at raw JSON. A document that fails to match is a parse failure, never a panic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Region registry, `GET /bosai/common/const/area.json`. Only the `offices`
/// (prefecture-level) section is relevant; extra upstream fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryDocument {
    pub offices: BTreeMap<String, Office>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Office {
    pub name: String,
}

/// One report in a forecast document, `GET /bosai/forecast/data/forecast/{code}.json`.
/// The document is an array of one or two reports: index 0 short-range, index 1
/// weekly. A missing `timeSeries` is a structural failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub time_series: Vec<TimeSeries>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    /// ISO-8601 timestamps, one per forecast step. Present on the weekly weather
    /// series; other series may omit it.
    #[serde(default)]
    pub time_defines: Option<Vec<String>>,
    #[serde(default)]
    pub areas: Vec<AreaSeries>,
}

/// Per-subregion slice of a series. Which of the optional lists is present
/// decides the series role: weather, weekly-range temperature or daily-single
/// temperature. Alignment across series is positional, not by name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaSeries {
    pub area: AreaRef,
    #[serde(default)]
    pub weather_codes: Option<Vec<String>>,
    #[serde(default)]
    pub temps: Option<Vec<String>>,
    #[serde(default)]
    pub temps_min: Option<Vec<String>>,
    #[serde(default)]
    pub temps_max: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AreaRef {
    pub name: String,
    #[serde(default)]
    pub code: String,
}
