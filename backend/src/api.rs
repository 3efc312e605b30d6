//! Public API surface for the comparison engine.
//!
//! This file consolidates the DTO types handed to the UI layer.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::charts::ChartPoint;
pub use crate::routes::charts::ChartSeries;
pub use crate::routes::charts::ComparisonRow;
pub use crate::routes::charts::MetricSummary;
pub use crate::routes::charts::WithPercentChange;
pub use crate::routes::overview::DailyCalls;
pub use crate::routes::overview::DailyVisits;
pub use crate::routes::overview::MetricSummaries;
pub use crate::routes::overview::OverviewAggregatedData;
pub use crate::routes::overview::OverviewCharts;
pub use crate::routes::overview::OverviewData;
pub use crate::routes::overview::Project;
pub use crate::routes::overview::ProjectsList;
pub use crate::routes::overview::TopPage;

pub use crate::routes::overview::get_overview_charts;
