#![allow(dead_code)]

use period_compare::api::OverviewData;
use period_compare::models::{DateRange, LocaleId, ObservationSeries};
use period_compare::TranslationTable;

/// Parses a `"start/end"` range, panicking on malformed test input.
pub fn range(raw: &str) -> DateRange {
    raw.parse().expect("test date range")
}

/// Consecutive daily values starting at the range start.
pub fn series(raw_range: &str, values: &[f64]) -> ObservationSeries {
    ObservationSeries::from_values(range(raw_range), values.iter().copied())
}

/// A series covering the whole range with one constant value per day.
pub fn filled_series(raw_range: &str, value: f64) -> ObservationSeries {
    let range = range(raw_range);
    ObservationSeries::from_values(range, std::iter::repeat(value).take(range.day_count()))
}

/// Loads an `OverviewData` fixture from `tests/fixtures/`.
pub fn load_overview_fixture(name: &str) -> OverviewData {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    let content = std::fs::read_to_string(&path).expect("fixture file");
    serde_json::from_str(&content).expect("fixture JSON")
}

/// The label catalogue used across integration tests.
pub fn translations() -> TranslationTable {
    TranslationTable::new()
        .with(LocaleId::EnCa, "calls", "Calls")
        .with(LocaleId::FrCa, "calls", "Appels")
        .with(LocaleId::EnCa, "yes", "Yes")
        .with(LocaleId::EnCa, "no", "No")
        .with(LocaleId::FrCa, "yes", "Oui")
        .with(LocaleId::FrCa, "no", "Non")
        .with(LocaleId::EnCa, "d3-be", "Business enquiries")
        .with(LocaleId::EnCa, "d3-benefits", "Benefits")
        .with(LocaleId::EnCa, "d3-c4", "Individual tax")
        .with(LocaleId::EnCa, "d3-c9", "Trust")
        .with(LocaleId::EnCa, "d3-ITE", "ITE")
        .with(LocaleId::EnCa, "d3-e-Services", "e-Services")
        .with(LocaleId::EnCa, "d3-cant-find-info", "Can't find info")
        .with(LocaleId::EnCa, "d3-other", "Other")
        .with(LocaleId::EnCa, "d3-hard-to-understand", "Hard to understand")
        .with(LocaleId::EnCa, "d3-error", "Error")
}
