use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult, ErrorContext};

/// Parse an ISO date as shipped by the data source.
///
/// Accepts plain `YYYY-MM-DD` as well as RFC 3339 timestamps
/// (`2022-03-01T00:00:00.000Z`). Timestamps are normalized to UTC before the
/// calendar day is taken, so an offset never shifts the day.
pub fn parse_iso_date(value: &str) -> EngineResult<NaiveDate> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|e| {
            EngineError::configuration_with_context(
                format!("Invalid ISO date '{}': {}", trimmed, e),
                ErrorContext::new("parse_iso_date"),
            )
        })
}

/// Serde adapter for `NaiveDate` fields that may arrive as full timestamps.
pub mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_iso_date(&raw).map_err(serde::de::Error::custom)
    }
}

/// Inclusive calendar date range, serialized as `"start/end"`.
///
/// Invariant: `start <= end`. Both constructors enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if start > end {
            return Err(EngineError::configuration_with_context(
                format!("Date range start {} is after end {}", start, end),
                ErrorContext::new("new_date_range"),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, both ends included.
    pub fn day_count(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }
}

impl FromStr for DateRange {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s.split_once('/').ok_or_else(|| {
            EngineError::configuration_with_context(
                "Date range must have the form 'start/end'",
                ErrorContext::new("parse_date_range").with_entity(s.to_string()),
            )
        })?;

        let start = parse_iso_date(start).map_err(|e| e.with_operation("parse_date_range"))?;
        let end = parse_iso_date(end).map_err(|e| e.with_operation("parse_date_range"))?;

        Self::new(start, end).map_err(|e| e.with_operation("parse_date_range"))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

impl TryFrom<String> for DateRange {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateRange> for String {
    fn from(value: DateRange) -> Self {
        value.to_string()
    }
}
