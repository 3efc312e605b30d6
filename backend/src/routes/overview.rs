use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{ChartPoint, ChartSeries, ComparisonRow, MetricSummary, WithPercentChange};
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::i18n::Translator;
use crate::models::{iso_date, DateRange, Granularity, LocaleId};
use crate::services::overview::OverviewService;

// =========================================================
// Overview input types
// =========================================================

/// Per-day visit count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyVisits {
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub visits: f64,
}

/// Per-day call count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyCalls {
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub calls: f64,
}

/// One entry of the most visited pages list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPage {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub visits: f64,
}

/// A project entry; fields other than `startDate` pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub start_date: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectsList {
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Aggregated metrics for one date range, as supplied by the data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewAggregatedData {
    pub visitors: f64,
    pub visits: f64,
    pub page_views: f64,
    pub impressions: f64,
    pub ctr: f64,
    pub position: f64,

    #[serde(rename = "enquiryLineBE")]
    pub enquiry_line_be: f64,
    pub enquiry_line_benefits: f64,
    #[serde(rename = "enquiryLineC4")]
    pub enquiry_line_c4: f64,
    #[serde(rename = "enquiryLineC9")]
    pub enquiry_line_c9: f64,
    #[serde(rename = "enquiryLineITE")]
    pub enquiry_line_ite: f64,
    #[serde(rename = "enquiryLineEService")]
    pub enquiry_line_e_service: f64,

    #[serde(rename = "dyf_yes")]
    pub dyf_yes: f64,
    #[serde(rename = "dyf_no")]
    pub dyf_no: f64,
    #[serde(rename = "fwylf_cant_find_info")]
    pub fwylf_cant_find_info: f64,
    #[serde(rename = "fwylf_other")]
    pub fwylf_other: f64,
    #[serde(rename = "fwylf_hard_to_understand")]
    pub fwylf_hard_to_understand: f64,
    #[serde(rename = "fwylf_error")]
    pub fwylf_error: f64,

    pub visits_by_day: Option<Vec<DailyVisits>>,
    pub calldrivers_by_day: Option<Vec<DailyCalls>>,
    pub top_pages_visited: Option<Vec<TopPage>>,
    /// Top ten search-console terms, passed through as delivered.
    #[serde(rename = "top10GSC")]
    pub top10_gsc: Option<Vec<serde_json::Value>>,
}

impl OverviewAggregatedData {
    /// Enquiry-line totals keyed by their translation key, in display order.
    pub fn enquiry_lines(&self) -> [(&'static str, f64); 6] {
        [
            ("d3-be", self.enquiry_line_be),
            ("d3-benefits", self.enquiry_line_benefits),
            ("d3-c4", self.enquiry_line_c4),
            ("d3-c9", self.enquiry_line_c9),
            ("d3-ITE", self.enquiry_line_ite),
            ("d3-e-Services", self.enquiry_line_e_service),
        ]
    }
}

/// Everything the overview page needs for one date-range selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewData {
    pub date_range: String,
    #[serde(default)]
    pub comparison_date_range: Option<String>,
    #[serde(default)]
    pub date_range_data: Option<OverviewAggregatedData>,
    #[serde(default)]
    pub comparison_date_range_data: Option<OverviewAggregatedData>,
    #[serde(default)]
    pub projects: Option<ProjectsList>,
}

impl OverviewData {
    /// Parsed current date range.
    pub fn current_range(&self) -> EngineResult<DateRange> {
        self.date_range.parse()
    }

    /// Parsed comparison date range; an absent or blank string is `None`.
    pub fn comparison_range(&self) -> EngineResult<Option<DateRange>> {
        self.comparison_date_range
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(str::parse::<DateRange>)
            .transpose()
    }
}

// =========================================================
// Overview output types + route
// =========================================================

/// Scalar metric cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSummaries {
    pub visitors: MetricSummary,
    pub visits: MetricSummary,
    pub page_views: MetricSummary,
    pub impressions: MetricSummary,
    pub ctr: MetricSummary,
    pub position: MetricSummary,
}

/// All chart and table data for the overview page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewCharts {
    pub date_range_label: String,
    pub comparison_date_range_label: Option<String>,
    pub metrics: MetricSummaries,
    pub top_pages_visited: Vec<TopPage>,
    pub top_pages_visited_with_percent_change: Option<Vec<WithPercentChange<TopPage>>>,
    #[serde(rename = "top10GSC")]
    pub top10_gsc: Option<Vec<serde_json::Value>>,
    pub visits_by_day: Vec<ChartSeries>,
    pub bar_table: Vec<ComparisonRow>,
    pub is_chart_data_over_threshold: bool,
    pub calldrivers_chart: Vec<ChartSeries>,
    pub calldrivers_table: Vec<ComparisonRow>,
    pub calldrivers_by_day: Vec<ChartSeries>,
    pub chart_merge: Option<Vec<ChartSeries>>,
    pub projects_list: Vec<Project>,
    pub dyf_data: Vec<ChartPoint>,
    pub what_was_wrong_data: Vec<ChartPoint>,
    pub is_empty: bool,
    pub has_comparison: bool,
}

pub const GET_OVERVIEW_CHARTS: &str = "get_overview_charts";

/// Compute every overview chart for one data snapshot.
///
/// Without an explicit locale, `config.labels.default_locale` is used.
/// Malformed date-range strings fail with a `Configuration` error. A top-pages
/// comparison that cannot be paired is dropped (logged) rather than failing
/// the whole bundle.
pub fn get_overview_charts<T: Translator + ?Sized>(
    data: &OverviewData,
    locale: impl Into<Option<LocaleId>>,
    granularity: Granularity,
    config: &EngineConfig,
    translator: &T,
) -> EngineResult<OverviewCharts> {
    let locale = config.locale_or_default(locale.into());
    let service = OverviewService::new(config, translator, locale);

    let labels = service.period_labels(data)?;
    let aligned = service.aligned_visits(data)?;
    let visits_by_day = service.build_visits_chart(&aligned, &labels);
    let calldrivers_by_day = service.calls_by_day_chart(data, granularity)?;
    let chart_merge = service.merge_charts(granularity, &visits_by_day, &calldrivers_by_day);

    let top_pages_visited_with_percent_change = match service.top_pages_with_percent_change(data) {
        Ok(pages) => pages,
        Err(e) => {
            log::warn!("Dropping top pages comparison: {}", e);
            None
        }
    };

    Ok(OverviewCharts {
        date_range_label: labels.current.clone(),
        comparison_date_range_label: labels.comparison.clone(),
        metrics: service.metric_summaries(data),
        top_pages_visited: service.top_pages(data),
        top_pages_visited_with_percent_change,
        top10_gsc: service.top10_gsc(data),
        bar_table: service.build_visits_table(&aligned),
        is_chart_data_over_threshold: service.is_chart_data_over_threshold(data),
        calldrivers_chart: service.calldrivers_chart(data, &labels),
        calldrivers_table: service.calldrivers_table(data),
        calldrivers_by_day,
        chart_merge,
        projects_list: service.projects_list(data)?,
        dyf_data: service.dyf_pie(data),
        what_was_wrong_data: service.what_was_wrong_pie(data),
        is_empty: aligned.is_empty(),
        has_comparison: aligned.has_comparison(),
        visits_by_day,
    })
}
