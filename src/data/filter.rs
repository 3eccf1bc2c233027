use super::model::{Sample, Series};

// ---------------------------------------------------------------------------
// Cutoff predicate: which samples of a series are kept
// ---------------------------------------------------------------------------

/// Whether `sample` survives the optional maximum-x cutoff.
///
/// * No cutoff → always kept
/// * `x <= cutoff` → kept (the boundary is inclusive)
/// * `x > cutoff` → dropped
pub fn passes_cutoff(sample: &Sample, cutoff: Option<i64>) -> bool {
    match cutoff {
        Some(max_x) => sample.x <= max_x,
        None => true,
    }
}

/// Indices of series that currently have something to draw.
pub fn visible_indices(series: &[Series], visible: &[bool]) -> Vec<usize> {
    series
        .iter()
        .enumerate()
        .filter(|(i, s)| visible.get(*i).copied().unwrap_or(true) && !s.is_empty())
        .map(|(i, _)| i)
        .collect()
}
