use crate::api::{ChartPoint, ChartSeries, ComparisonRow};
use crate::config::ChartSettings;
use crate::models::{AlignedPair, DailyObservation, LocaleId};

use super::labels::{PeriodLabels, PointLabelFormat};

/// Shapes aligned pairs into chart series and comparison tables.
#[derive(Debug, Clone)]
pub struct ChartSeriesBuilder<'a> {
    settings: &'a ChartSettings,
    locale: LocaleId,
}

impl<'a> ChartSeriesBuilder<'a> {
    pub fn new(settings: &'a ChartSettings, locale: LocaleId) -> Self {
        Self { settings, locale }
    }

    /// Per-point label format, chosen from the unaligned current length.
    pub fn point_format(&self, aligned: &AlignedPair) -> PointLabelFormat {
        PointLabelFormat::for_span(
            aligned.current_real_len(),
            self.settings.weekday_label_max_days,
        )
    }

    /// Chart series for an aligned pair.
    ///
    /// Above `series_split_threshold` aligned points the result holds one
    /// series per period; otherwise one series per aligned index, each with
    /// the current point and, when present, the comparison point. Returns an
    /// empty vector when both periods are empty.
    pub fn build_series(&self, aligned: &AlignedPair, labels: &PeriodLabels) -> Vec<ChartSeries> {
        if aligned.is_empty() || aligned.current_real_len() == 0 {
            return Vec::new();
        }

        let x_labels = self.x_labels(aligned);
        let comparison_label = labels.comparison_or_empty();

        if aligned.len() > self.settings.series_split_threshold {
            log::debug!(
                "Aligned length {} exceeds {}, emitting one series per period",
                aligned.len(),
                self.settings.series_split_threshold
            );

            let mut result = vec![ChartSeries::new(
                labels.current.clone(),
                points(&x_labels, aligned.current()),
            )];
            if aligned.has_comparison() {
                result.push(ChartSeries::new(
                    comparison_label,
                    points(&x_labels, aligned.comparison()),
                ));
            }
            return result;
        }

        x_labels
            .into_iter()
            .zip(aligned.pairs())
            .map(|(name, (current, comparison))| {
                let mut series = vec![ChartPoint::new(labels.current.clone(), current.value())];
                if aligned.has_comparison() {
                    series.push(ChartPoint::new(comparison_label, comparison.value()));
                }
                ChartSeries::new(name, series)
            })
            .collect()
    }

    /// One table row per aligned index.
    ///
    /// `prev_value` is `None` on every row when no comparison exists.
    pub fn build_table(&self, aligned: &AlignedPair) -> Vec<ComparisonRow> {
        if aligned.current_real_len() == 0 {
            return Vec::new();
        }

        self.x_labels(aligned)
            .into_iter()
            .zip(aligned.pairs())
            .map(|(name, (current, comparison))| ComparisonRow {
                name,
                curr_value: current.value(),
                prev_value: aligned.has_comparison().then(|| comparison.value()),
            })
            .collect()
    }

    /// X-axis labels from the current period's dates; padding slots are blank.
    fn x_labels(&self, aligned: &AlignedPair) -> Vec<String> {
        let format = self.point_format(aligned);
        aligned
            .current()
            .iter()
            .map(|observation| {
                observation
                    .date()
                    .map(|date| format.format(date, self.locale))
                    .unwrap_or_default()
            })
            .collect()
    }
}

fn points(x_labels: &[String], observations: &[DailyObservation]) -> Vec<ChartPoint> {
    x_labels
        .iter()
        .zip(observations)
        .map(|(name, observation)| ChartPoint::new(name.clone(), observation.value()))
        .collect()
}
