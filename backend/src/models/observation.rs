use chrono::NaiveDate;
use serde::Serialize;

use super::date_range::DateRange;

/// One slot of a per-day sequence.
///
/// `Padding` is a synthetic slot inserted to line calendar months up; it has
/// no date and always reads as zero. A real day with no traffic is
/// `Real { value: 0.0 }`, never `Padding`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DailyObservation {
    Real { date: NaiveDate, value: f64 },
    Padding,
}

impl DailyObservation {
    /// Non-finite and negative inputs are treated as "no data that day".
    pub fn real(date: NaiveDate, value: f64) -> Self {
        let value = if value.is_finite() && value > 0.0 {
            value
        } else {
            0.0
        };
        DailyObservation::Real { date, value }
    }

    pub fn value(&self) -> f64 {
        match self {
            DailyObservation::Real { value, .. } => *value,
            DailyObservation::Padding => 0.0,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DailyObservation::Real { date, .. } => Some(*date),
            DailyObservation::Padding => None,
        }
    }

    pub fn is_padding(&self) -> bool {
        matches!(self, DailyObservation::Padding)
    }
}

/// Chronological per-day observations for one date range.
///
/// The sequence may be shorter than the range when upstream data is
/// incomplete; nothing here assumes `len() == range.day_count()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSeries {
    range: DateRange,
    observations: Vec<DailyObservation>,
}

impl ObservationSeries {
    pub fn new(range: DateRange, observations: Vec<DailyObservation>) -> Self {
        Self {
            range,
            observations,
        }
    }

    /// Build a series from raw per-day records by selecting one metric.
    pub fn from_records<T>(
        range: DateRange,
        records: &[T],
        date_of: impl Fn(&T) -> NaiveDate,
        value_of: impl Fn(&T) -> f64,
    ) -> Self {
        let observations = records
            .iter()
            .map(|r| DailyObservation::real(date_of(r), value_of(r)))
            .collect();
        Self::new(range, observations)
    }

    /// Build a series of consecutive days starting at `range.start()`.
    pub fn from_values(range: DateRange, values: impl IntoIterator<Item = f64>) -> Self {
        let observations = range
            .start()
            .iter_days()
            .zip(values)
            .map(|(date, value)| DailyObservation::real(date, value))
            .collect();
        Self::new(range, observations)
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn observations(&self) -> &[DailyObservation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// First real date, falling back to the range start.
    pub fn start_date(&self) -> NaiveDate {
        self.observations
            .iter()
            .find_map(DailyObservation::date)
            .unwrap_or_else(|| self.range.start())
    }

    pub fn is_all_zero(&self) -> bool {
        self.observations.iter().all(|o| o.value() == 0.0)
    }

    pub fn total(&self) -> f64 {
        self.observations.iter().map(DailyObservation::value).sum()
    }
}

/// Two index-correspondent sequences of equal length.
///
/// Index `i` of `current` pairs with index `i` of `comparison`; the calendar
/// dates at a given index generally differ. Only the alignment service builds
/// these, so the equal-length invariant holds for every value of this type.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedPair {
    current: Vec<DailyObservation>,
    comparison: Vec<DailyObservation>,
    current_range: DateRange,
    comparison_range: Option<DateRange>,
    current_real_len: usize,
    has_comparison: bool,
    is_empty: bool,
}

impl AlignedPair {
    pub(crate) fn new(
        current: Vec<DailyObservation>,
        comparison: Vec<DailyObservation>,
        current_range: DateRange,
        comparison_range: Option<DateRange>,
        current_real_len: usize,
        has_comparison: bool,
        is_empty: bool,
    ) -> Self {
        debug_assert_eq!(current.len(), comparison.len());
        Self {
            current,
            comparison,
            current_range,
            comparison_range,
            current_real_len,
            has_comparison,
            is_empty,
        }
    }

    pub fn current(&self) -> &[DailyObservation] {
        &self.current
    }

    pub fn comparison(&self) -> &[DailyObservation] {
        &self.comparison
    }

    pub fn current_range(&self) -> &DateRange {
        &self.current_range
    }

    pub fn comparison_range(&self) -> Option<&DateRange> {
        self.comparison_range.as_ref()
    }

    /// Aligned length (identical for both sides).
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Length of the current series before padding.
    pub fn current_real_len(&self) -> usize {
        self.current_real_len
    }

    /// Whether a comparison period with data was supplied.
    pub fn has_comparison(&self) -> bool {
        self.has_comparison
    }

    /// Both periods carry only zeros (or nothing at all).
    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    /// Iterate `(current, comparison)` slots by aligned index.
    pub fn pairs(&self) -> impl Iterator<Item = (&DailyObservation, &DailyObservation)> {
        self.current.iter().zip(self.comparison.iter())
    }
}
