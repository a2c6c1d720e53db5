//! Forecast normalizer: turns a JMA report pair into uniform per-subregion rows.
//!
//! The upstream document is irregular. The short-range report carries today's
//! temperature detail, the weekly report carries multi-day weather codes plus a
//! coarser temperature series whose shape differs per region (explicit min/max
//! arrays, or one value per day). Series are aligned positionally by subregion
//! index; upstream does not keep area names consistent across series, so matching
//! by name would silently drop data.

use crate::domain::entities::forecast::{ForecastEntry, SubregionForecast, WeatherKind};
use crate::domain::error::DomainError;
use crate::domain::upstream::{Report, TimeSeries};
use chrono::{DateTime, Datelike};

const NO_TEMP: &str = "--";

/// Weekly temperature series come in two shapes, tagged per subregion.
enum TempSeries {
    WeeklyRange { mins: Vec<String>, maxs: Vec<String> },
    DailySingle { temps: Vec<String> },
}

/// Schema-check a raw forecast document, then normalize it. Any structural
/// mismatch is a parse failure; callers treat it like a fetch failure.
pub fn normalize_document(raw: &serde_json::Value) -> Result<Vec<SubregionForecast>, DomainError> {
    let reports: Vec<Report> = serde_json::from_value(raw.clone())
        .map_err(|e| DomainError::Parse(format!("unexpected forecast document shape: {e}")))?;
    if reports.is_empty() {
        return Err(DomainError::Parse("forecast document carries no reports".into()));
    }
    Ok(normalize(&reports))
}

/// Normalize a typed report pair. Index 0 is the short-range report; index 1,
/// when present, the weekly one — a single-report document serves both roles.
/// Structural shortfalls (no weather series, inconsistent temperature series,
/// unparseable timestamps) yield an empty list rather than an error; an empty
/// result means "no usable data for this region".
pub fn normalize(reports: &[Report]) -> Vec<SubregionForecast> {
    let Some(short) = reports.first() else {
        return vec![];
    };
    let weekly = reports.get(1).unwrap_or(short);

    let short_temps = short_term_temps(short);

    // Role detection by key presence on the first area of each weekly series.
    let mut ts_weather: Option<&TimeSeries> = None;
    let mut ts_temp: Option<&TimeSeries> = None;
    for series in &weekly.time_series {
        let Some(first) = series.areas.first() else {
            continue;
        };
        if first.weather_codes.is_some() {
            ts_weather = Some(series);
        } else if first.temps.is_some() || first.temps_min.is_some() {
            ts_temp = Some(series);
        }
    }
    // The weather series is mandatory; the temperature series is not.
    let Some(ts_weather) = ts_weather else {
        tracing::debug!("weekly report has no weatherCodes series");
        return vec![];
    };

    let Some(weekly_temps) = classify_temp_series(ts_temp) else {
        tracing::debug!("weekly temperature series has inconsistent shape");
        return vec![];
    };

    // The weekly date list defines the canonical step count.
    let Some(time_defines) = &ts_weather.time_defines else {
        tracing::debug!("weekly weather series is missing timeDefines");
        return vec![];
    };
    let mut labels = Vec::with_capacity(time_defines.len());
    for t in time_defines {
        let Ok(dt) = DateTime::parse_from_rfc3339(t) else {
            tracing::debug!(timestamp = %t, "unparseable timeDefines entry");
            return vec![];
        };
        labels.push(format!("{}/{}", dt.month(), dt.day()));
    }

    let mut result = Vec::with_capacity(ts_weather.areas.len());
    for (idx, area) in ts_weather.areas.iter().enumerate() {
        let Some(codes) = &area.weather_codes else {
            // One malformed area invalidates the positional alignment of the
            // whole document.
            return vec![];
        };
        let temps = weekly_temps.get(idx);
        let short_vals = short_temps.get(idx).map(Vec::as_slice).unwrap_or(&[]);

        // Stop early when weather codes run short of the date list.
        let steps = labels.len().min(codes.len());
        let mut entries = Vec::with_capacity(steps);
        for i in 0..steps {
            let kind = WeatherKind::from_code(&codes[i]);
            entries.push(ForecastEntry {
                day: labels[i].clone(),
                kind,
                status: kind.label().to_string(),
                temp: display_temp(temps, short_vals, i),
            });
        }
        result.push(SubregionForecast {
            name: area.area.name.clone(),
            entries,
        });
    }
    result
}

/// Temperature table from the short-range report: the first series whose areas
/// carry `temps`, collected by position.
fn short_term_temps(report: &Report) -> Vec<Vec<String>> {
    for series in &report.time_series {
        let Some(first) = series.areas.first() else {
            continue;
        };
        if first.temps.is_some() {
            return series
                .areas
                .iter()
                .map(|a| a.temps.clone().unwrap_or_default())
                .collect();
        }
    }
    vec![]
}

/// Tag each temperature-series area as weekly-range or daily-single. `None`
/// when an area fits neither shape (tempsMin without tempsMax, or nothing at
/// all), which invalidates positional alignment.
fn classify_temp_series(series: Option<&TimeSeries>) -> Option<Vec<TempSeries>> {
    let Some(series) = series else {
        return Some(vec![]);
    };
    let mut tagged = Vec::with_capacity(series.areas.len());
    for area in &series.areas {
        if let Some(mins) = &area.temps_min {
            let maxs = area.temps_max.as_ref()?;
            tagged.push(TempSeries::WeeklyRange {
                mins: mins.clone(),
                maxs: maxs.clone(),
            });
        } else if let Some(temps) = &area.temps {
            tagged.push(TempSeries::DailySingle {
                temps: temps.clone(),
            });
        } else {
            return None;
        }
    }
    Some(tagged)
}

/// Display-temperature fallback chain. Upstream omits the same-day min/max once a
/// region has passed its daily high, so step 0 of a weekly-range series falls back
/// to the short-term table. Output strings are opaque display text to callers.
fn display_temp(weekly: Option<&TempSeries>, short: &[String], step: usize) -> String {
    match weekly {
        None => NO_TEMP.to_string(),
        Some(TempSeries::WeeklyRange { mins, maxs }) => {
            let min_v = mins.get(step).map(String::as_str).unwrap_or("");
            let max_v = maxs.get(step).map(String::as_str).unwrap_or("");

            if step == 0 && (min_v.is_empty() || max_v.is_empty()) {
                match short.len() {
                    0 => NO_TEMP.to_string(),
                    1 => format!("{}°C", short[0]),
                    _ => format!("{}-{}°C", short[0], short[1]),
                }
            } else if !min_v.is_empty() && !max_v.is_empty() {
                format!("{min_v}-{max_v}°C")
            } else if !min_v.is_empty() || !max_v.is_empty() {
                let v = if max_v.is_empty() { min_v } else { max_v };
                format!("{v}°C")
            } else {
                NO_TEMP.to_string()
            }
        }
        Some(TempSeries::DailySingle { temps }) => {
            let v = temps.get(step).map(String::as_str).unwrap_or("");
            if v.is_empty() {
                NO_TEMP.to_string()
            } else {
                format!("{v}°C")
            }
        }
    }
}
