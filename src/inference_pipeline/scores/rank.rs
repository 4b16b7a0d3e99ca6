use std::cmp::Ordering;

use tracing::debug;

use crate::inference_pipeline::scores::types::RankedScore;

/// Keeps every score `>= threshold` and orders the survivors by descending value.
///
/// Equal values keep ascending original index order. NaN never satisfies the
/// threshold comparison, so NaN scores are dropped and a NaN threshold
/// yields an empty ranking.
pub fn rank(scores: &[f32], threshold: f32) -> Vec<RankedScore> {
    let mut retained: Vec<RankedScore> = scores
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value >= threshold)
        .map(|(index, &value)| RankedScore { index, value })
        .collect();

    // Stable, so ties stay in index order.
    retained.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));

    debug!(
        total = scores.len(),
        retained = retained.len(),
        threshold,
        "Ranked scores"
    );
    retained
}

/// Drops everything past the first `k` entries of a ranking.
pub fn truncate_top_k(mut ranking: Vec<RankedScore>, k: usize) -> Vec<RankedScore> {
    ranking.truncate(k);
    ranking
}
