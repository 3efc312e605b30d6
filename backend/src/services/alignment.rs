use crate::models::{AlignedPair, DailyObservation, ObservationSeries};

use super::calendar::{month_delta, PaddingPlan, PeriodSide};

/// Align a current series against an optional comparison series.
///
/// The result always has equal-length sides. When the comparison is absent or
/// empty it is represented by padding only and `has_comparison()` is false.
/// Runs in time linear in the combined length.
pub fn align(current: &ObservationSeries, comparison: Option<&ObservationSeries>) -> AlignedPair {
    let is_empty = current.is_all_zero() && comparison.map_or(true, ObservationSeries::is_all_zero);
    let usable_comparison = comparison.filter(|series| !series.is_empty());

    let (mut aligned_current, mut aligned_comparison) = match usable_comparison {
        Some(comparison_series) => {
            let plan = month_delta(current, comparison_series);
            log::debug!(
                "Aligning {} current days against {} comparison days with {} padding instruction(s)",
                current.len(),
                comparison_series.len(),
                plan.instructions().len()
            );
            (
                apply_plan(current.observations(), &plan, PeriodSide::Current),
                apply_plan(comparison_series.observations(), &plan, PeriodSide::Comparison),
            )
        }
        None => (current.observations().to_vec(), Vec::new()),
    };

    let aligned_len = aligned_current.len().max(aligned_comparison.len());
    aligned_current.resize(aligned_len, DailyObservation::Padding);
    aligned_comparison.resize(aligned_len, DailyObservation::Padding);

    AlignedPair::new(
        aligned_current,
        aligned_comparison,
        *current.range(),
        comparison.map(|series| *series.range()),
        current.len(),
        usable_comparison.is_some(),
        is_empty,
    )
}

/// Materialize one side of a padding plan.
///
/// An instruction whose index lies past the end of the sequence built so far
/// appends its padding at the end.
pub fn apply_plan(
    observations: &[DailyObservation],
    plan: &PaddingPlan,
    side: PeriodSide,
) -> Vec<DailyObservation> {
    let mut output = Vec::with_capacity(observations.len() + plan.padding_count(side));
    let mut source = observations.iter().copied();

    for instruction in plan.for_side(side) {
        while output.len() < instruction.insert_at_index {
            match source.next() {
                Some(observation) => output.push(observation),
                None => break,
            }
        }
        output.extend(std::iter::repeat(DailyObservation::Padding).take(instruction.count));
    }
    output.extend(source);

    output
}
