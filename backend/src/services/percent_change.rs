use crate::api::WithPercentChange;
use crate::error::{EngineError, EngineResult, ErrorContext};

/// Relative change of `current` against `previous`, in percent.
///
/// Returns `None` when the change is not computable: a zero baseline, a
/// non-finite input, or a ratio that overflows. The result is not rounded.
pub fn percent_change(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 || !current.is_finite() || !previous.is_finite() {
        return None;
    }
    Some((current - previous) / previous * 100.0).filter(|change| change.is_finite())
}

/// Annotate each current record with the percent change of one metric against
/// the previous record at the same index.
///
/// Both slices must be non-empty and of equal length; anything else is an
/// `Alignment` error, never a silent truncation.
pub fn with_percent_change<T, F>(
    current: &[T],
    previous: &[T],
    value_of: F,
) -> EngineResult<Vec<WithPercentChange<T>>>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    if current.is_empty() || previous.is_empty() || current.len() != previous.len() {
        return Err(EngineError::alignment_with_context(
            "Invalid data arrays for percent change",
            ErrorContext::new("with_percent_change").with_details(format!(
                "current_len={}, previous_len={}",
                current.len(),
                previous.len()
            )),
        ));
    }

    Ok(current
        .iter()
        .zip(previous)
        .map(|(curr, prev)| WithPercentChange {
            item: curr.clone(),
            percent_change: percent_change(value_of(curr), value_of(prev)),
        })
        .collect())
}
