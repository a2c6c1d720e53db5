use tenki::application::normalize::{normalize, normalize_document};
use tenki::domain::entities::forecast::WeatherKind;
use tenki::domain::upstream::Report;

fn reports(v: serde_json::Value) -> Vec<Report> {
    serde_json::from_value(v).unwrap()
}

/// Weekly document with a given weather/temperature layout and a short report
/// carrying `short_temps` for the single subregion.
fn doc(
    days: usize,
    codes: Vec<&str>,
    temp_area: serde_json::Value,
    short_temps: Vec<&str>,
) -> Vec<Report> {
    let time_defines: Vec<String> = (0..days)
        .map(|i| format!("2026-08-{:02}T00:00:00+09:00", 10 + i))
        .collect();
    reports(serde_json::json!([
        {
            "timeSeries": [
                {
                    "timeDefines": ["2026-08-10T00:00:00+09:00"],
                    "areas": [{"area": {"name": "城北"}, "temps": short_temps}]
                }
            ]
        },
        {
            "timeSeries": [
                {
                    "timeDefines": time_defines,
                    "areas": [{"area": {"name": "城北"}, "weatherCodes": codes}]
                },
                {
                    "areas": [temp_area]
                }
            ]
        }
    ]))
}

#[test]
fn test_weekly_range_formatting_off_step_zero() {
    // Step 0 both blank (short-term fallback applies), then each min/max
    // combination at the later steps.
    let out = normalize(&doc(
        5,
        vec!["100", "100", "100", "100", "100"],
        serde_json::json!({
            "area": {"name": "城北"},
            "tempsMin": ["", "5", "5", "", ""],
            "tempsMax": ["", "10", "", "10", ""]
        }),
        vec!["20", "28"],
    ));
    assert_eq!(out.len(), 1);
    let temps: Vec<&str> = out[0].entries.iter().map(|e| e.temp.as_str()).collect();
    assert_eq!(temps, vec!["20-28°C", "5-10°C", "5°C", "10°C", "--"]);
}

#[test]
fn test_step_zero_fallback_single_short_value() {
    let out = normalize(&doc(
        1,
        vec!["100"],
        serde_json::json!({
            "area": {"name": "城北"},
            "tempsMin": [""],
            "tempsMax": ["9"]
        }),
        vec!["20"],
    ));
    assert_eq!(out[0].entries[0].temp, "20°C");
}

#[test]
fn test_step_zero_fallback_no_short_values() {
    let out = normalize(&doc(
        1,
        vec!["100"],
        serde_json::json!({
            "area": {"name": "城北"},
            "tempsMin": ["5"],
            "tempsMax": [""]
        }),
        vec![],
    ));
    assert_eq!(out[0].entries[0].temp, "--");
}

#[test]
fn test_step_zero_fallback_ignores_partial_range() {
    // Even with a usable max, a blank min at step 0 routes through the
    // short-term table.
    let out = normalize(&doc(
        1,
        vec!["100"],
        serde_json::json!({
            "area": {"name": "城北"},
            "tempsMin": [""],
            "tempsMax": ["31"]
        }),
        vec!["18", "29"],
    ));
    assert_eq!(out[0].entries[0].temp, "18-29°C");
}

#[test]
fn test_daily_single_temperatures() {
    let out = normalize(&doc(
        3,
        vec!["300", "300", "300"],
        serde_json::json!({
            "area": {"name": "城北"},
            "temps": ["25", "", "30"]
        }),
        vec![],
    ));
    let temps: Vec<&str> = out[0].entries.iter().map(|e| e.temp.as_str()).collect();
    assert_eq!(temps, vec!["25°C", "--", "30°C"]);
}

#[test]
fn test_no_temperature_series_at_all() {
    let out = normalize(&reports(serde_json::json!([
        {
            "timeSeries": [
                {
                    "timeDefines": ["2026-08-10T00:00:00+09:00", "2026-08-11T00:00:00+09:00"],
                    "areas": [{"area": {"name": "城北"}, "weatherCodes": ["100", "200"]}]
                }
            ]
        }
    ])));
    assert_eq!(out.len(), 1);
    assert!(out[0].entries.iter().all(|e| e.temp == "--"));
}

#[test]
fn test_missing_weather_series_yields_empty() {
    let out = normalize(&reports(serde_json::json!([
        {
            "timeSeries": [
                {
                    "timeDefines": ["2026-08-10T00:00:00+09:00"],
                    "areas": [{"area": {"name": "城北"}, "temps": ["20"]}]
                }
            ]
        }
    ])));
    assert!(out.is_empty());
}

#[test]
fn test_truncates_to_shorter_weather_code_list() {
    // Seven dates, five codes: exactly five entries come out.
    let out = normalize(&doc(
        7,
        vec!["100", "200", "300", "400", "100"],
        serde_json::json!({
            "area": {"name": "城北"},
            "temps": ["1", "2", "3", "4", "5", "6", "7"]
        }),
        vec![],
    ));
    assert_eq!(out[0].entries.len(), 5);
    assert_eq!(out[0].entries[4].day, "8/14");
}

#[test]
fn test_single_report_serves_both_roles() {
    let out = normalize(&reports(serde_json::json!([
        {
            "timeSeries": [
                {
                    "timeDefines": ["2026-08-10T00:00:00+09:00", "2026-08-11T00:00:00+09:00"],
                    "areas": [{"area": {"name": "城北"}, "weatherCodes": ["101", "202"]}]
                },
                {
                    "areas": [{"area": {"name": "城北"}, "temps": ["26", "24"]}]
                }
            ]
        }
    ])));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].entries.len(), 2);
    assert_eq!(out[0].entries[0].kind, WeatherKind::Clear);
    assert_eq!(out[0].entries[1].kind, WeatherKind::Cloudy);
}

#[test]
fn test_status_and_day_labels() {
    let out = normalize(&doc(
        2,
        vec!["313", "405"],
        serde_json::json!({"area": {"name": "城北"}, "temps": ["10", "2"]}),
        vec![],
    ));
    let entries = &out[0].entries;
    assert_eq!(entries[0].day, "8/10");
    assert_eq!(entries[0].status, "雨");
    assert_eq!(entries[0].kind, WeatherKind::Rain);
    assert_eq!(entries[1].status, "雪");
    assert_eq!(entries[1].kind, WeatherKind::Snow);
}

#[test]
fn test_positional_alignment_across_series() {
    // Area names differ between the weather and temperature series on purpose;
    // temperatures must still land on the subregion at the same index.
    let out = normalize(&reports(serde_json::json!([
        {
            "timeSeries": [
                {
                    "timeDefines": ["2026-08-10T00:00:00+09:00"],
                    "areas": [
                        {"area": {"name": "北部"}, "temps": ["11", "19"]},
                        {"area": {"name": "南部"}, "temps": ["15", "23"]}
                    ]
                }
            ]
        },
        {
            "timeSeries": [
                {
                    "timeDefines": ["2026-08-10T00:00:00+09:00", "2026-08-11T00:00:00+09:00"],
                    "areas": [
                        {"area": {"name": "県北部"}, "weatherCodes": ["100", "200"]},
                        {"area": {"name": "県南部"}, "weatherCodes": ["300", "400"]}
                    ]
                },
                {
                    "areas": [
                        {"area": {"name": "甲"}, "tempsMin": ["", "4"], "tempsMax": ["", "12"]},
                        {"area": {"name": "乙"}, "tempsMin": ["", "8"], "tempsMax": ["", "16"]}
                    ]
                }
            ]
        }
    ])));
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].name, "県北部");
    assert_eq!(out[0].entries[0].temp, "11-19°C");
    assert_eq!(out[0].entries[1].temp, "4-12°C");
    assert_eq!(out[1].name, "県南部");
    assert_eq!(out[1].entries[0].temp, "15-23°C");
    assert_eq!(out[1].entries[1].temp, "8-16°C");
}

#[test]
fn test_more_subregions_than_temperature_areas() {
    // The extra subregion has no temperature data and renders "--" throughout.
    let out = normalize(&reports(serde_json::json!([
        {"timeSeries": []},
        {
            "timeSeries": [
                {
                    "timeDefines": ["2026-08-10T00:00:00+09:00"],
                    "areas": [
                        {"area": {"name": "甲"}, "weatherCodes": ["100"]},
                        {"area": {"name": "乙"}, "weatherCodes": ["200"]}
                    ]
                },
                {
                    "areas": [{"area": {"name": "甲"}, "temps": ["20"]}]
                }
            ]
        }
    ])));
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].entries[0].temp, "20°C");
    assert_eq!(out[1].entries[0].temp, "--");
}

#[test]
fn test_malformed_document_is_a_parse_error() {
    assert!(normalize_document(&serde_json::json!({"offices": {}})).is_err());
    assert!(normalize_document(&serde_json::json!([])).is_err());
    assert!(normalize_document(&serde_json::json!([{"noTimeSeries": true}])).is_err());
}

#[test]
fn test_well_formed_document_normalizes() {
    let raw = serde_json::json!([
        {
            "timeSeries": [
                {
                    "timeDefines": ["2026-08-10T00:00:00+09:00"],
                    "areas": [{"area": {"name": "城北"}, "weatherCodes": ["100"]}]
                }
            ]
        }
    ]);
    let out = normalize_document(&raw).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "城北");
}

#[test]
fn test_unparseable_time_define_yields_empty() {
    let out = normalize(&reports(serde_json::json!([
        {
            "timeSeries": [
                {
                    "timeDefines": ["not-a-timestamp"],
                    "areas": [{"area": {"name": "城北"}, "weatherCodes": ["100"]}]
                }
            ]
        }
    ])));
    assert!(out.is_empty());
}
