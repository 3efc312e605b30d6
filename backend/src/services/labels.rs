//! Locale-aware date labels.
//!
//! Every call takes its locale explicitly and formats through chrono's
//! localized formatter, so concurrent callers with different locales never
//! interfere.

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::error::EngineResult;
use crate::models::{DateRange, Granularity, LocaleId};

/// Short month and day, e.g. `Mar 3`.
pub const MONTH_DAY_PATTERN: &str = "%b %-d";
/// Full weekday name, e.g. `Friday`.
pub const WEEKDAY_PATTERN: &str = "%A";

/// Short French month names as the dashboard prints them (`mars`, `juil.`).
const FR_CA_SHORT_MONTHS: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// Format a calendar date with a strftime pattern in the given locale.
///
/// In `fr-CA`, `%b` uses the dashboard's month abbreviations instead of
/// chrono's three-letter forms, which collide for June and July.
pub fn format_date(date: NaiveDate, pattern: &str, locale: LocaleId) -> String {
    let pattern = match locale {
        LocaleId::FrCa if pattern.contains("%b") => {
            pattern.replace("%b", FR_CA_SHORT_MONTHS[date.month0() as usize])
        }
        _ => pattern.to_string(),
    };
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized(&pattern, locale.chrono_locale())
        .to_string()
}

/// Short label for a date span, e.g. `Mar 3-Mar 9`.
pub fn period_label(range: &DateRange, locale: LocaleId) -> String {
    format!(
        "{}-{}",
        format_date(range.start(), MONTH_DAY_PATTERN, locale),
        format_date(range.end(), MONTH_DAY_PATTERN, locale)
    )
}

/// Project start date as shown in the projects list.
pub fn project_date(date: NaiveDate, locale: LocaleId) -> String {
    let pattern = match locale {
        LocaleId::EnCa => "%b %d, %Y",
        LocaleId::FrCa => "%-d %b %Y",
    };
    format_date(date, pattern, locale)
}

/// How individual chart points are labelled on the x-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLabelFormat {
    Weekday,
    MonthDay,
}

impl PointLabelFormat {
    /// Weekday names for spans of at most `weekday_max_days` days.
    pub fn for_span(day_count: usize, weekday_max_days: usize) -> Self {
        if day_count <= weekday_max_days {
            PointLabelFormat::Weekday
        } else {
            PointLabelFormat::MonthDay
        }
    }

    pub fn for_granularity(granularity: Granularity) -> Self {
        match granularity {
            Granularity::Week => PointLabelFormat::Weekday,
            _ => PointLabelFormat::MonthDay,
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            PointLabelFormat::Weekday => WEEKDAY_PATTERN,
            PointLabelFormat::MonthDay => MONTH_DAY_PATTERN,
        }
    }

    pub fn format(&self, date: NaiveDate, locale: LocaleId) -> String {
        format_date(date, self.pattern(), locale)
    }
}

/// Labels for both periods of one comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodLabels {
    pub current: String,
    pub comparison: Option<String>,
}

impl PeriodLabels {
    pub fn new(current: &DateRange, comparison: Option<&DateRange>, locale: LocaleId) -> Self {
        Self {
            current: period_label(current, locale),
            comparison: comparison.map(|range| period_label(range, locale)),
        }
    }

    /// Parse both `"start/end"` strings and label them.
    pub fn from_strings(
        current: &str,
        comparison: Option<&str>,
        locale: LocaleId,
    ) -> EngineResult<Self> {
        let current: DateRange = current.parse()?;
        let comparison = comparison
            .filter(|raw| !raw.trim().is_empty())
            .map(str::parse::<DateRange>)
            .transpose()?;
        Ok(Self::new(&current, comparison.as_ref(), locale))
    }

    pub fn comparison_or_empty(&self) -> &str {
        self.comparison.as_deref().unwrap_or("")
    }
}
