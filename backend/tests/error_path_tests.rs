//! Error path tests.
//!
//! These tests trigger every surfaced error condition and check that the
//! error kind and its context survive propagation through the public API.

use std::io::Write;

use serde_json::json;

use period_compare::api::{get_overview_charts, ChartPoint, ChartSeries, OverviewData};
use period_compare::models::{DateRange, Granularity, LocaleId};
use period_compare::services::{merge_strict, with_percent_change};
use period_compare::{EngineConfig, EngineError};

mod support;

// =========================================================
// Alignment errors
// =========================================================

#[test]
fn test_percent_change_arrays_with_empty_previous() {
    let current = vec![json!({ "visits": 10 })];
    let previous: Vec<serde_json::Value> = vec![];

    let result = with_percent_change(&current, &previous, |v| v["visits"].as_f64().unwrap_or(0.0));

    let err = result.unwrap_err();
    assert!(matches!(err, EngineError::Alignment { .. }));
    assert!(err.to_string().contains("with_percent_change"));
    assert_eq!(err.context().details.as_deref(), Some("current_len=1, previous_len=0"));
}

#[test]
fn test_merge_strict_mismatched_axes() {
    let visits = vec![ChartSeries::new(
        "Mar 1-Mar 31",
        vec![ChartPoint::new("Mar 1", 1.0); 31],
    )];
    let calls = vec![ChartSeries::new(
        "Calls Mar 1-Mar 30",
        vec![ChartPoint::new("Mar 1", 1.0); 30],
    )];

    let err = merge_strict(Granularity::Custom, &[visits.as_slice(), calls.as_slice()]).unwrap_err();

    assert!(err.is_alignment());
    assert_eq!(err.context().entity.as_deref(), Some("custom"));
}

// =========================================================
// Configuration errors
// =========================================================

#[test]
fn test_malformed_date_range_fails_bundle() {
    let data: OverviewData = serde_json::from_value(json!({
        "dateRange": "2023-03-01 to 2023-03-31"
    }))
    .unwrap();

    let err = get_overview_charts(
        &data,
        LocaleId::EnCa,
        Granularity::Custom,
        &EngineConfig::default(),
        &support::translations(),
    )
    .unwrap_err();

    assert!(err.is_configuration());
    assert_eq!(err.context().operation.as_deref(), Some("parse_date_range"));
}

#[test]
fn test_malformed_comparison_range_fails_bundle() {
    let data: OverviewData = serde_json::from_value(json!({
        "dateRange": "2023-03-01/2023-03-31",
        "comparisonDateRange": "2023-02-31/2023-03-01"
    }))
    .unwrap();

    let result = get_overview_charts(
        &data,
        LocaleId::EnCa,
        Granularity::Custom,
        &EngineConfig::default(),
        &support::translations(),
    );

    assert!(result.unwrap_err().is_configuration());
}

#[test]
fn test_reversed_date_range() {
    let err = "2023-03-31/2023-03-01".parse::<DateRange>().unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_unknown_locale_and_granularity() {
    assert!("de-DE".parse::<LocaleId>().unwrap_err().is_configuration());
    assert!("hourly".parse::<Granularity>().unwrap_err().is_configuration());
}

#[test]
fn test_invalid_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[charts]\nseries_split_threshold = \"many\"").unwrap();

    let err = EngineConfig::from_file(file.path()).unwrap_err();

    assert!(err.is_configuration());
    assert_eq!(err.context().operation.as_deref(), Some("load_config_file"));
}

#[test]
fn test_missing_projects_date_is_configuration_error() {
    let data: OverviewData = serde_json::from_value(json!({
        "dateRange": "2023-03-01/2023-03-07",
        "projects": { "projects": [{ "title": "Broken", "startDate": "soon" }] }
    }))
    .unwrap();

    let err = get_overview_charts(
        &data,
        LocaleId::EnCa,
        Granularity::Custom,
        &EngineConfig::default(),
        &support::translations(),
    )
    .unwrap_err();

    assert!(err.is_configuration());
    assert_eq!(err.context().operation.as_deref(), Some("projects_list"));
}

// =========================================================
// Recovered locally, never an error
// =========================================================

#[test]
fn test_missing_data_degrades_to_empty_results() {
    let data: OverviewData = serde_json::from_value(json!({
        "dateRange": "2023-03-01/2023-03-07"
    }))
    .unwrap();

    let charts = get_overview_charts(
        &data,
        LocaleId::EnCa,
        Granularity::Custom,
        &EngineConfig::default(),
        &support::translations(),
    )
    .unwrap();

    assert!(charts.is_empty);
    assert!(!charts.has_comparison);
    assert!(charts.visits_by_day.is_empty());
    assert!(charts.bar_table.is_empty());
    assert_eq!(charts.metrics.visits.value, 0.0);
    assert_eq!(charts.metrics.visits.percent_change, None);
    assert!(charts.top_pages_visited_with_percent_change.is_none());
    assert_eq!(charts.comparison_date_range_label, None);
}
