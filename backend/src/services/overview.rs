//! Overview dashboard composition.
//!
//! Turns one `OverviewData` snapshot into the metric cards, charts, and tables
//! of the overview page. Every method is a pure function of its inputs and
//! the service's config, translator, and locale.

use crate::api::{
    ChartPoint, ChartSeries, ComparisonRow, MetricSummaries, MetricSummary, OverviewAggregatedData,
    OverviewData, Project, TopPage, WithPercentChange,
};
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::i18n::Translator;
use crate::models::{parse_iso_date, AlignedPair, Granularity, LocaleId, ObservationSeries};

use super::alignment::align;
use super::chart_series::ChartSeriesBuilder;
use super::labels::{project_date, PeriodLabels, PointLabelFormat};
use super::merge::merge;
use super::percent_change::{percent_change, with_percent_change};

/// Scalar metrics shown as summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMetric {
    Visitors,
    Visits,
    PageViews,
    Impressions,
    Ctr,
    Position,
}

impl SummaryMetric {
    pub const ALL: [SummaryMetric; 6] = [
        SummaryMetric::Visitors,
        SummaryMetric::Visits,
        SummaryMetric::PageViews,
        SummaryMetric::Impressions,
        SummaryMetric::Ctr,
        SummaryMetric::Position,
    ];

    pub fn value_in(self, data: &OverviewAggregatedData) -> f64 {
        match self {
            SummaryMetric::Visitors => data.visitors,
            SummaryMetric::Visits => data.visits,
            SummaryMetric::PageViews => data.page_views,
            SummaryMetric::Impressions => data.impressions,
            SummaryMetric::Ctr => data.ctr,
            SummaryMetric::Position => data.position,
        }
    }
}

/// Overview computations bound to one config, translator, and locale.
pub struct OverviewService<'a, T: Translator + ?Sized> {
    config: &'a EngineConfig,
    translator: &'a T,
    locale: LocaleId,
}

impl<'a, T: Translator + ?Sized> OverviewService<'a, T> {
    pub fn new(config: &'a EngineConfig, translator: &'a T, locale: LocaleId) -> Self {
        Self {
            config,
            translator,
            locale,
        }
    }

    pub fn locale(&self) -> LocaleId {
        self.locale
    }

    fn translate(&self, key: &str) -> String {
        self.translator.translate(key, self.locale)
    }

    fn builder(&self) -> ChartSeriesBuilder<'a> {
        ChartSeriesBuilder::new(&self.config.charts, self.locale)
    }

    // ---------------------------------------------------------
    // Metric cards
    // ---------------------------------------------------------

    /// Current value of one metric with its change against the comparison.
    pub fn metric_summary(&self, data: &OverviewData, metric: SummaryMetric) -> MetricSummary {
        let current = data.date_range_data.as_ref().map(|d| metric.value_in(d));
        let previous = data
            .comparison_date_range_data
            .as_ref()
            .map(|d| metric.value_in(d));

        MetricSummary {
            value: current.unwrap_or(0.0),
            percent_change: current
                .zip(previous)
                .and_then(|(curr, prev)| percent_change(curr, prev)),
        }
    }

    pub fn metric_summaries(&self, data: &OverviewData) -> MetricSummaries {
        MetricSummaries {
            visitors: self.metric_summary(data, SummaryMetric::Visitors),
            visits: self.metric_summary(data, SummaryMetric::Visits),
            page_views: self.metric_summary(data, SummaryMetric::PageViews),
            impressions: self.metric_summary(data, SummaryMetric::Impressions),
            ctr: self.metric_summary(data, SummaryMetric::Ctr),
            position: self.metric_summary(data, SummaryMetric::Position),
        }
    }

    // ---------------------------------------------------------
    // Top pages
    // ---------------------------------------------------------

    pub fn top_pages(&self, data: &OverviewData) -> Vec<TopPage> {
        data.date_range_data
            .as_ref()
            .and_then(|d| d.top_pages_visited.clone())
            .unwrap_or_default()
    }

    /// Current period's top search terms, untouched.
    pub fn top10_gsc(&self, data: &OverviewData) -> Option<Vec<serde_json::Value>> {
        data.date_range_data
            .as_ref()
            .and_then(|d| d.top10_gsc.clone())
    }

    /// Current top pages annotated with the change in visits against the
    /// comparison page at the same rank.
    ///
    /// `Ok(None)` when either period has no top-pages list; an `Alignment`
    /// error when the lists are empty or of different lengths.
    pub fn top_pages_with_percent_change(
        &self,
        data: &OverviewData,
    ) -> EngineResult<Option<Vec<WithPercentChange<TopPage>>>> {
        let current = data
            .date_range_data
            .as_ref()
            .and_then(|d| d.top_pages_visited.as_ref());
        let previous = data
            .comparison_date_range_data
            .as_ref()
            .and_then(|d| d.top_pages_visited.as_ref());

        match (current, previous) {
            (Some(current), Some(previous)) => {
                with_percent_change(current, previous, |page| page.visits)
                    .map(Some)
                    .map_err(|e| e.with_entity("topPagesVisited"))
            }
            _ => Ok(None),
        }
    }

    // ---------------------------------------------------------
    // Visits by day
    // ---------------------------------------------------------

    pub fn period_labels(&self, data: &OverviewData) -> EngineResult<PeriodLabels> {
        let current = data.current_range()?;
        let comparison = data.comparison_range()?;
        Ok(PeriodLabels::new(&current, comparison.as_ref(), self.locale))
    }

    /// Calendar-aligned visits for both periods.
    pub fn aligned_visits(&self, data: &OverviewData) -> EngineResult<AlignedPair> {
        let current_range = data.current_range()?;
        let comparison_range = data.comparison_range()?;

        let current_visits = data
            .date_range_data
            .as_ref()
            .and_then(|d| d.visits_by_day.as_deref())
            .unwrap_or_default();
        let current = ObservationSeries::from_records(
            current_range,
            current_visits,
            |v| v.date,
            |v| v.visits,
        );

        let comparison_visits = data
            .comparison_date_range_data
            .as_ref()
            .and_then(|d| d.visits_by_day.as_deref());
        let comparison = comparison_range.zip(comparison_visits).map(|(range, visits)| {
            ObservationSeries::from_records(range, visits, |v| v.date, |v| v.visits)
        });

        Ok(align(&current, comparison.as_ref()))
    }

    pub fn build_visits_chart(&self, aligned: &AlignedPair, labels: &PeriodLabels) -> Vec<ChartSeries> {
        self.builder().build_series(aligned, labels)
    }

    pub fn build_visits_table(&self, aligned: &AlignedPair) -> Vec<ComparisonRow> {
        self.builder().build_table(aligned)
    }

    pub fn visits_by_day_chart(&self, data: &OverviewData) -> EngineResult<Vec<ChartSeries>> {
        let labels = self.period_labels(data)?;
        let aligned = self.aligned_visits(data)?;
        Ok(self.build_visits_chart(&aligned, &labels))
    }

    pub fn visits_by_day_table(&self, data: &OverviewData) -> EngineResult<Vec<ComparisonRow>> {
        let aligned = self.aligned_visits(data)?;
        Ok(self.build_visits_table(&aligned))
    }

    /// Whether the current period has more daily points than the chart can
    /// show as grouped bars.
    pub fn is_chart_data_over_threshold(&self, data: &OverviewData) -> bool {
        let days = data
            .date_range_data
            .as_ref()
            .and_then(|d| d.visits_by_day.as_ref())
            .map_or(0, Vec::len);
        days > self.config.charts.series_split_threshold
    }

    // ---------------------------------------------------------
    // Call drivers
    // ---------------------------------------------------------

    /// Enquiry-line totals per period, zero lines dropped.
    pub fn calldrivers_chart(&self, data: &OverviewData, labels: &PeriodLabels) -> Vec<ChartSeries> {
        let current = data.date_range_data.as_ref().map(|d| d.enquiry_lines());
        let previous = data
            .comparison_date_range_data
            .as_ref()
            .map(|d| d.enquiry_lines());

        if all_zero(current.as_ref()) && all_zero(previous.as_ref()) {
            return Vec::new();
        }

        let to_points = |lines: Option<[(&str, f64); 6]>| -> Vec<ChartPoint> {
            lines
                .into_iter()
                .flatten()
                .filter(|(_, value)| *value > 0.0)
                .map(|(key, value)| ChartPoint::new(self.translate(key), value))
                .collect()
        };

        let mut result = vec![ChartSeries::new(labels.current.clone(), to_points(current))];
        if previous.is_some() {
            result.push(ChartSeries::new(
                labels.comparison_or_empty(),
                to_points(previous),
            ));
        }
        result
    }

    /// Enquiry lines with activity in both periods.
    pub fn calldrivers_table(&self, data: &OverviewData) -> Vec<ComparisonRow> {
        let current = data
            .date_range_data
            .as_ref()
            .map(|d| d.enquiry_lines())
            .unwrap_or_default();
        let previous = data
            .comparison_date_range_data
            .as_ref()
            .map(|d| d.enquiry_lines())
            .unwrap_or_default();

        current
            .iter()
            .zip(previous.iter())
            .filter(|((_, curr), (_, prev))| *curr > 0.0 && *prev > 0.0)
            .map(|((key, curr), (_, prev))| ComparisonRow {
                name: self.translate(key),
                curr_value: *curr,
                prev_value: Some(*prev),
            })
            .collect()
    }

    /// Daily call volume, one series per period.
    ///
    /// Outside weekly granularity the comparison points reuse the current
    /// period's date at the same index so both lines share an x-axis. If
    /// either period has no daily calls, both series come back without points.
    pub fn calls_by_day_chart(
        &self,
        data: &OverviewData,
        granularity: Granularity,
    ) -> EngineResult<Vec<ChartSeries>> {
        let labels = self.period_labels(data)?;
        let calls = self.translate("calls");
        let series_name = |label: &str| {
            if label.is_empty() {
                calls.clone()
            } else {
                format!("{} {}", calls, label)
            }
        };
        let current_name = series_name(&labels.current);
        let comparison_name = series_name(labels.comparison_or_empty());

        let current = data
            .date_range_data
            .as_ref()
            .and_then(|d| d.calldrivers_by_day.as_deref())
            .unwrap_or_default();
        let comparison = data
            .comparison_date_range_data
            .as_ref()
            .and_then(|d| d.calldrivers_by_day.as_deref())
            .unwrap_or_default();

        if current.is_empty() || comparison.is_empty() {
            return Ok(vec![
                ChartSeries::new(current_name, Vec::new()),
                ChartSeries::new(comparison_name, Vec::new()),
            ]);
        }

        let format = PointLabelFormat::for_granularity(granularity);
        let share_axis = granularity != Granularity::Week;

        let current_points = current
            .iter()
            .map(|day| ChartPoint::new(format.format(day.date, self.locale), day.calls))
            .collect();
        let comparison_points = comparison
            .iter()
            .enumerate()
            .map(|(i, day)| {
                let date = current
                    .get(i)
                    .filter(|_| share_axis)
                    .map_or(day.date, |shared| shared.date);
                ChartPoint::new(format.format(date, self.locale), day.calls)
            })
            .collect();

        Ok(vec![
            ChartSeries::new(current_name, current_points),
            ChartSeries::new(comparison_name, comparison_points),
        ])
    }

    /// Visits and calls on one chart, when the granularity allows it.
    pub fn merge_charts(
        &self,
        granularity: Granularity,
        visits: &[ChartSeries],
        calls: &[ChartSeries],
    ) -> Option<Vec<ChartSeries>> {
        merge(granularity, &[visits, calls])
    }

    pub fn chart_merge(
        &self,
        data: &OverviewData,
        granularity: Granularity,
    ) -> EngineResult<Option<Vec<ChartSeries>>> {
        let visits = self.visits_by_day_chart(data)?;
        let calls = self.calls_by_day_chart(data, granularity)?;
        Ok(self.merge_charts(granularity, &visits, &calls))
    }

    // ---------------------------------------------------------
    // Projects and feedback
    // ---------------------------------------------------------

    /// Projects with start dates formatted for the current locale.
    pub fn projects_list(&self, data: &OverviewData) -> EngineResult<Vec<Project>> {
        let Some(list) = data.projects.as_ref() else {
            return Ok(Vec::new());
        };

        list.projects
            .iter()
            .map(|project| {
                let start = parse_iso_date(&project.start_date)
                    .map_err(|e| e.with_operation("projects_list"))?;
                Ok(Project {
                    start_date: project_date(start, self.locale),
                    extra: project.extra.clone(),
                })
            })
            .collect()
    }

    /// "Did you find what you were looking for" yes/no split.
    pub fn dyf_pie(&self, data: &OverviewData) -> Vec<ChartPoint> {
        let default = OverviewAggregatedData::default();
        let d = data.date_range_data.as_ref().unwrap_or(&default);
        self.pie(&[("yes", d.dyf_yes), ("no", d.dyf_no)])
    }

    /// Reasons given when the visitor did not find what they needed.
    pub fn what_was_wrong_pie(&self, data: &OverviewData) -> Vec<ChartPoint> {
        let default = OverviewAggregatedData::default();
        let d = data.date_range_data.as_ref().unwrap_or(&default);
        self.pie(&[
            ("d3-cant-find-info", d.fwylf_cant_find_info),
            ("d3-other", d.fwylf_other),
            ("d3-hard-to-understand", d.fwylf_hard_to_understand),
            ("d3-error", d.fwylf_error),
        ])
    }

    fn pie(&self, slices: &[(&str, f64)]) -> Vec<ChartPoint> {
        if slices.iter().all(|(_, value)| *value == 0.0) {
            return Vec::new();
        }
        slices
            .iter()
            .map(|(key, value)| ChartPoint::new(self.translate(key), *value))
            .collect()
    }
}

fn all_zero(lines: Option<&[(&'static str, f64); 6]>) -> bool {
    lines.map_or(true, |lines| lines.iter().all(|(_, value)| *value == 0.0))
}
