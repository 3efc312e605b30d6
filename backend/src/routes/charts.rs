use serde::{Deserialize, Serialize};

// =========================================================
// Chart and table types
// =========================================================

/// A single labelled value inside a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A named group of chart points (one bar group or one line).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub series: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn new(name: impl Into<String>, series: Vec<ChartPoint>) -> Self {
        Self {
            name: name.into(),
            series,
        }
    }
}

/// One line of the tabular companion view.
///
/// `prev_value` is omitted from the JSON when no comparison period exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub name: String,
    pub curr_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_value: Option<f64>,
}

/// An arbitrary record annotated with its percent change against the
/// comparison period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithPercentChange<T> {
    #[serde(flatten)]
    pub item: T,
    #[serde(
        rename = "percentChange",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub percent_change: Option<f64>,
}

/// Scalar metric total with its change against the comparison period.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSummary {
    pub value: f64,
    pub percent_change: Option<f64>,
}
