use std::hint::black_box;

use chrono::{Days, NaiveDate};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use period_compare::config::ChartSettings;
use period_compare::models::{DateRange, LocaleId, ObservationSeries};
use period_compare::services::{align, plan_for_spans, ChartSeriesBuilder, PeriodLabels};

fn series(start: NaiveDate, days: usize) -> ObservationSeries {
    let end = start
        .checked_add_days(Days::new(days as u64 - 1))
        .expect("benchmark range");
    let range = DateRange::new(start, end).expect("benchmark range");
    ObservationSeries::from_values(range, (0..days).map(|i| (i % 97) as f64))
}

fn bench_plan_for_spans(c: &mut Criterion) {
    let mut group = c.benchmark_group("padding_plan");

    let current = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
    let comparison = NaiveDate::from_ymd_opt(2022, 12, 31).unwrap();
    for days in [31usize, 90, 365, 730] {
        group.bench_with_input(BenchmarkId::new("plan_for_spans", days), &days, |b, &days| {
            b.iter(|| plan_for_spans(black_box(current), days, black_box(comparison), days));
        });
    }

    group.finish();
}

fn bench_align(c: &mut Criterion) {
    let mut group = c.benchmark_group("align");

    for days in [31usize, 90, 365, 730] {
        let current = series(NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(), days);
        let comparison = series(NaiveDate::from_ymd_opt(2022, 2, 1).unwrap(), days);
        group.bench_with_input(
            BenchmarkId::new("align", days),
            &(current, comparison),
            |b, (current, comparison)| {
                b.iter(|| align(black_box(current), Some(black_box(comparison))));
            },
        );
    }

    group.finish();
}

fn bench_build_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart_series");

    let settings = ChartSettings::default();
    let builder = ChartSeriesBuilder::new(&settings, LocaleId::EnCa);
    for days in [31usize, 365] {
        let current = series(NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(), days);
        let comparison = series(NaiveDate::from_ymd_opt(2022, 2, 1).unwrap(), days);
        let aligned = align(&current, Some(&comparison));
        let labels = PeriodLabels::new(current.range(), Some(comparison.range()), LocaleId::EnCa);

        group.bench_with_input(BenchmarkId::new("build_series", days), &aligned, |b, aligned| {
            b.iter(|| builder.build_series(black_box(aligned), &labels));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_plan_for_spans, bench_align, bench_build_series);
criterion_main!(benches);
