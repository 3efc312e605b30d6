#[cfg(test)]
mod tests {
    use crate::config::ChartSettings;
    use crate::models::{AlignedPair, DateRange, LocaleId, ObservationSeries};
    use crate::services::alignment::align;
    use crate::services::chart_series::ChartSeriesBuilder;
    use crate::services::labels::PeriodLabels;

    fn create_series(range: &str, values: &[f64]) -> ObservationSeries {
        let range: DateRange = range.parse().unwrap();
        ObservationSeries::from_values(range, values.iter().copied())
    }

    fn create_aligned(current: &str, comparison: Option<&str>, value: f64) -> AlignedPair {
        let current_range: DateRange = current.parse().unwrap();
        let current = create_series(current, &vec![value; current_range.day_count()]);
        let comparison = comparison.map(|raw| {
            let range: DateRange = raw.parse().unwrap();
            create_series(raw, &vec![value + 1.0; range.day_count()])
        });
        align(&current, comparison.as_ref())
    }

    fn labels_for(aligned: &AlignedPair) -> PeriodLabels {
        PeriodLabels::new(aligned.current_range(), aligned.comparison_range(), LocaleId::EnCa)
    }

    #[test]
    fn test_length_31_emits_one_series_per_date() {
        let settings = ChartSettings::default();
        let builder = ChartSeriesBuilder::new(&settings, LocaleId::EnCa);
        let aligned = create_aligned("2023-03-01/2023-03-31", Some("2022-03-01/2022-03-31"), 5.0);
        assert_eq!(aligned.len(), 31);

        let series = builder.build_series(&aligned, &labels_for(&aligned));

        assert_eq!(series.len(), 31);
        assert_eq!(series[0].name, "Mar 1");
        assert_eq!(series[30].name, "Mar 31");
        assert_eq!(series[0].series.len(), 2);
        assert_eq!(series[0].series[0].name, "Mar 1-Mar 31");
        assert_eq!(series[0].series[0].value, 5.0);
        assert_eq!(series[0].series[1].value, 6.0);
    }

    #[test]
    fn test_length_32_emits_one_series_per_period() {
        let settings = ChartSettings::default();
        let builder = ChartSeriesBuilder::new(&settings, LocaleId::EnCa);
        let aligned = create_aligned("2023-03-01/2023-04-01", Some("2022-03-01/2022-04-01"), 5.0);
        assert_eq!(aligned.len(), 32);

        let series = builder.build_series(&aligned, &labels_for(&aligned));

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "Mar 1-Apr 1");
        assert_eq!(series[0].series.len(), 32);
        assert_eq!(series[1].series.len(), 32);
        assert_eq!(series[1].series[31].name, "Apr 1");
        assert_eq!(series[1].series[31].value, 6.0);
    }

    #[test]
    fn test_threshold_comes_from_settings() {
        let settings = ChartSettings {
            series_split_threshold: 10,
            ..ChartSettings::default()
        };
        let builder = ChartSeriesBuilder::new(&settings, LocaleId::EnCa);
        let aligned = create_aligned("2023-03-01/2023-03-11", Some("2022-03-01/2022-03-11"), 1.0);

        assert_eq!(builder.build_series(&aligned, &labels_for(&aligned)).len(), 2);
    }

    #[test]
    fn test_week_uses_weekday_labels() {
        let settings = ChartSettings::default();
        let builder = ChartSeriesBuilder::new(&settings, LocaleId::EnCa);
        let aligned = create_aligned("2023-03-06/2023-03-12", Some("2023-01-02/2023-01-08"), 2.0);

        let series = builder.build_series(&aligned, &labels_for(&aligned));

        assert_eq!(series.len(), 7);
        assert_eq!(series[0].name, "Monday");
        assert_eq!(series[6].name, "Sunday");
    }

    #[test]
    fn test_missing_comparison_omits_second_point() {
        let settings = ChartSettings::default();
        let builder = ChartSeriesBuilder::new(&settings, LocaleId::EnCa);
        let aligned = create_aligned("2023-03-01/2023-03-10", None, 3.0);

        let series = builder.build_series(&aligned, &labels_for(&aligned));
        assert_eq!(series.len(), 10);
        assert!(series.iter().all(|s| s.series.len() == 1));

        let long = create_aligned("2023-01-01/2023-03-31", None, 3.0);
        let series = builder.build_series(&long, &labels_for(&long));
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].series.len(), 90);
    }

    #[test]
    fn test_all_zero_builds_nothing() {
        let settings = ChartSettings::default();
        let builder = ChartSeriesBuilder::new(&settings, LocaleId::EnCa);
        let current = create_series("2023-03-01/2023-03-10", &[0.0; 10]);
        let comparison = create_series("2023-02-01/2023-02-10", &[0.0; 10]);
        let aligned = align(&current, Some(&comparison));

        assert!(aligned.is_empty());
        assert!(builder.build_series(&aligned, &labels_for(&aligned)).is_empty());
        // The table still lists the zero days.
        assert_eq!(builder.build_table(&aligned).len(), 13);
    }

    #[test]
    fn test_padding_slots_have_blank_labels() {
        let settings = ChartSettings::default();
        let builder = ChartSeriesBuilder::new(&settings, LocaleId::EnCa);
        let aligned = create_aligned("2023-02-01/2023-02-28", Some("2023-01-01/2023-01-31"), 4.0);
        assert_eq!(aligned.len(), 31);

        let series = builder.build_series(&aligned, &labels_for(&aligned));
        assert_eq!(series.len(), 31);
        assert_eq!(series[27].name, "Feb 28");
        assert_eq!(series[28].name, "");
        assert_eq!(series[28].series[0].value, 0.0);
        assert_eq!(series[28].series[1].value, 5.0);
    }

    #[test]
    fn test_table_rows_follow_aligned_index() {
        let settings = ChartSettings::default();
        let builder = ChartSeriesBuilder::new(&settings, LocaleId::EnCa);
        let aligned = create_aligned("2023-03-01/2023-03-10", Some("2023-02-01/2023-02-10"), 2.0);

        let rows = builder.build_table(&aligned);

        assert_eq!(rows.len(), 13);
        assert_eq!(rows[0].name, "Mar 1");
        assert_eq!(rows[0].curr_value, 2.0);
        assert_eq!(rows[0].prev_value, Some(3.0));
        assert_eq!(rows[12].name, "");
        assert_eq!(rows[12].prev_value, Some(0.0));
    }

    #[test]
    fn test_table_without_comparison_has_no_prev_values() {
        let settings = ChartSettings::default();
        let builder = ChartSeriesBuilder::new(&settings, LocaleId::FrCa);
        let aligned = create_aligned("2023-03-06/2023-03-08", None, 2.0);

        let rows = builder.build_table(&aligned);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, "lundi");
        assert!(rows.iter().all(|row| row.prev_value.is_none()));
    }
}
