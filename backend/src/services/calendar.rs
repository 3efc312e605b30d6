//! Calendar-month padding plans.
//!
//! Two day sequences are walked in month-sized strides from their own start
//! dates. Wherever one side's month is shorter, that side receives enough
//! padding slots to line the next month boundary up with the other side.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::ObservationSeries;

/// Calendar days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    match date.month() {
        2 if is_leap_year(date.year()) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Which of the two periods a padding instruction targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodSide {
    Current,
    Comparison,
}

/// Insert `count` padding slots at `insert_at_index` of one side.
///
/// Indices are expressed in the aligned (already padded) coordinate space, so
/// instructions must be applied in plan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaddingInstruction {
    pub insert_at_index: usize,
    pub count: usize,
    pub applies_to: PeriodSide,
}

/// Ordered padding instructions for one pair of series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddingPlan {
    instructions: Vec<PaddingInstruction>,
}

impl PaddingPlan {
    pub fn instructions(&self) -> &[PaddingInstruction] {
        &self.instructions
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Instructions targeting `side`, in ascending index order.
    pub fn for_side(&self, side: PeriodSide) -> impl Iterator<Item = &PaddingInstruction> {
        self.instructions
            .iter()
            .filter(move |instruction| instruction.applies_to == side)
    }

    /// Total padding slots the plan adds to `side`.
    pub fn padding_count(&self, side: PeriodSide) -> usize {
        self.for_side(side).map(|instruction| instruction.count).sum()
    }
}

/// Padding plan for two observation series.
///
/// Each series is walked from its first real date. An empty series on either
/// side produces an empty plan.
pub fn month_delta(current: &ObservationSeries, comparison: &ObservationSeries) -> PaddingPlan {
    plan_for_spans(
        current.start_date(),
        current.len(),
        comparison.start_date(),
        comparison.len(),
    )
}

/// Padding plan from start dates and lengths alone.
pub fn plan_for_spans(
    current_start: NaiveDate,
    current_len: usize,
    comparison_start: NaiveDate,
    comparison_len: usize,
) -> PaddingPlan {
    if current_len == 0 || comparison_len == 0 {
        return PaddingPlan::default();
    }

    let max_days = current_len.max(comparison_len);
    let mut instructions = Vec::new();
    let mut offset = 0;
    let mut current_cursor = current_start;
    let mut comparison_cursor = comparison_start;

    while offset < max_days {
        let current_days = days_in_month(current_cursor) as usize;
        let comparison_days = days_in_month(comparison_cursor) as usize;

        if current_days > comparison_days {
            instructions.push(PaddingInstruction {
                insert_at_index: offset + comparison_days,
                count: current_days - comparison_days,
                applies_to: PeriodSide::Comparison,
            });
            offset += current_days;
        } else {
            if comparison_days > current_days {
                instructions.push(PaddingInstruction {
                    insert_at_index: offset + current_days,
                    count: comparison_days - current_days,
                    applies_to: PeriodSide::Current,
                });
            }
            offset += comparison_days;
        }

        // Month arithmetic clamps to the last day (Jan 31 -> Feb 28).
        match (
            current_cursor.checked_add_months(Months::new(1)),
            comparison_cursor.checked_add_months(Months::new(1)),
        ) {
            (Some(next_current), Some(next_comparison)) => {
                current_cursor = next_current;
                comparison_cursor = next_comparison;
            }
            _ => break,
        }
    }

    PaddingPlan { instructions }
}
