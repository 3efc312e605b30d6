//! Service layer for the comparison engine.
//!
//! Each engine component lives in its own module, leaves first:
//! percent change, calendar padding, alignment, labels, chart shaping, and
//! merging. `overview` composes them into the dashboard-level operations.

pub mod alignment;
pub mod calendar;
pub mod chart_series;
pub mod labels;
pub mod merge;
pub mod overview;
pub mod percent_change;

#[cfg(test)]
#[path = "chart_series_tests.rs"]
mod chart_series_tests;


pub use alignment::{align, apply_plan};
pub use calendar::{
    days_in_month, month_delta, plan_for_spans, PaddingInstruction, PaddingPlan, PeriodSide,
};
pub use chart_series::ChartSeriesBuilder;
pub use labels::{format_date, period_label, project_date, PeriodLabels, PointLabelFormat};
pub use merge::{merge, merge_strict};
pub use overview::{OverviewService, SummaryMetric};
pub use percent_change::{percent_change, with_percent_change};
