use serde::{Deserialize, Serialize};

/// Weather bucket derived from the JMA numeric code ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherKind {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Unknown,
}

impl WeatherKind {
    /// JMA weather codes arrive as digit strings ("101", "270", ...). Buckets are
    /// half-open hundreds: [100,200) clear, [200,300) cloudy, [300,400) rain,
    /// [400,500) snow. Anything else, including non-numeric input, is Unknown.
    pub fn from_code(code: &str) -> Self {
        match code.trim().parse::<u32>() {
            Ok(c) if (100..200).contains(&c) => WeatherKind::Clear,
            Ok(c) if (200..300).contains(&c) => WeatherKind::Cloudy,
            Ok(c) if (300..400).contains(&c) => WeatherKind::Rain,
            Ok(c) if (400..500).contains(&c) => WeatherKind::Snow,
            _ => WeatherKind::Unknown,
        }
    }

    /// Japanese status text shown next to each forecast step.
    pub fn label(&self) -> &'static str {
        match self {
            WeatherKind::Clear => "晴れ",
            WeatherKind::Cloudy => "くもり",
            WeatherKind::Rain => "雨",
            WeatherKind::Snow => "雪",
            WeatherKind::Unknown => "-",
        }
    }

    /// Icon/color tag for presentation layers. Opaque to the core.
    pub fn tone(&self) -> &'static str {
        match self {
            WeatherKind::Clear => "sun",
            WeatherKind::Cloudy => "cloud",
            WeatherKind::Rain => "rain",
            WeatherKind::Snow => "snow",
            WeatherKind::Unknown => "none",
        }
    }
}

/// One forecast step for one subregion. `temp` is an already-formatted display
/// string ("5-13°C", "7°C" or "--"), never a numeric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub day: String,
    pub kind: WeatherKind,
    pub status: String,
    pub temp: String,
}

/// Forecast steps for one subregion, in upstream date order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubregionForecast {
    pub name: String,
    pub entries: Vec<ForecastEntry>,
}
