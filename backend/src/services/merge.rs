use crate::api::ChartSeries;
use crate::error::{EngineError, EngineResult, ErrorContext};
use crate::models::Granularity;

/// Concatenate independently built chart groups into one combined chart.
///
/// Returns `None` for granularities that keep a single-metric view (weekly,
/// monthly). Groups are never re-aligned; a group whose x-axis length differs
/// from the others is kept as is and logged.
pub fn merge(granularity: Granularity, groups: &[&[ChartSeries]]) -> Option<Vec<ChartSeries>> {
    if !granularity.allows_merge() {
        return None;
    }

    let lengths = axis_lengths(groups);
    if has_mismatch(&lengths) {
        log::warn!(
            "Merging chart groups with different axis lengths {:?}; x-axes will not line up",
            lengths
        );
    }

    Some(concat(groups))
}

/// Like [`merge`], but rejects groups whose x-axis lengths differ.
pub fn merge_strict(
    granularity: Granularity,
    groups: &[&[ChartSeries]],
) -> EngineResult<Option<Vec<ChartSeries>>> {
    if !granularity.allows_merge() {
        return Ok(None);
    }

    let lengths = axis_lengths(groups);
    if has_mismatch(&lengths) {
        return Err(EngineError::alignment_with_context(
            "Cannot merge chart groups with different axis lengths",
            ErrorContext::new("merge_strict")
                .with_entity(granularity.to_string())
                .with_details(format!("axis_lengths={:?}", lengths)),
        ));
    }

    Ok(Some(concat(groups)))
}

/// Longest series in each group that has any points.
fn axis_lengths(groups: &[&[ChartSeries]]) -> Vec<usize> {
    groups
        .iter()
        .filter_map(|group| group.iter().map(|s| s.series.len()).max())
        .filter(|len| *len > 0)
        .collect()
}

fn has_mismatch(lengths: &[usize]) -> bool {
    lengths.windows(2).any(|pair| pair[0] != pair[1])
}

fn concat(groups: &[&[ChartSeries]]) -> Vec<ChartSeries> {
    groups.iter().flat_map(|group| group.iter().cloned()).collect()
}
