//! Best-match selection between the two normalized name sets.
//!
//! Two policies share one scan loop: best-of-ratio records the highest
//! similarity ratio for every source, best-of-distance records the minimum
//! raw edit distance and accepts it only under a threshold. Swapping the
//! scoring strategy means supplying a different score closure; the control
//! flow never changes. The matcher never fails on valid string inputs and
//! never mutates the collections it scans.

use crate::distance::EditDistance;
use crate::model::MatchResult;

/// Scan `candidates` for the best score against `source`.
///
/// `score` is "higher is better"; strict improvement is required to replace
/// the incumbent, so the first-encountered candidate wins ties. Returns
/// `None` only for an empty candidate set.
fn scan_best<F>(source: &str, candidates: &[String], mut score: F) -> Option<(usize, f64)>
where
    F: FnMut(&str, &str) -> f64,
{
    let mut best: Option<(usize, f64)> = None;
    for (idx, candidate) in candidates.iter().enumerate() {
        let s = score(source, candidate);
        match best {
            Some((_, incumbent)) if s <= incumbent => {}
            _ => best = Some((idx, s)),
        }
    }
    best
}

/// Best-of-ratio: score every source against every candidate with the
/// similarity ratio and keep the maximum. Only a perfect 100 (an exact
/// normalized match) counts as `matched`; everything below is a
/// discrepancy to report, not an error.
pub fn match_by_ratio(sources: &[String], candidates: &[String]) -> Vec<MatchResult> {
    let mut engine = EditDistance::new();

    sources
        .iter()
        .map(|source| match scan_best(source, candidates, |a, b| engine.ratio(a, b)) {
            Some((idx, score)) => MatchResult {
                source_name: source.clone(),
                candidate_name: candidates[idx].clone(),
                score,
                matched: score == 100.0,
            },
            None => MatchResult::no_match(source),
        })
        .collect()
}

/// Best-of-distance: keep the candidate at minimum edit distance, accepted
/// only when strictly below `max_distance`. `score` carries the distance.
pub fn match_by_distance(
    sources: &[String],
    candidates: &[String],
    max_distance: usize,
) -> Vec<MatchResult> {
    let mut engine = EditDistance::new();

    sources
        .iter()
        .map(|source| {
            match scan_best(source, candidates, |a, b| -(engine.distance(a, b) as f64)) {
                Some((idx, negated)) => {
                    let dist = -negated;
                    MatchResult {
                        source_name: source.clone(),
                        candidate_name: candidates[idx].clone(),
                        score: dist,
                        matched: dist < max_distance as f64,
                    }
                }
                None => MatchResult::no_match(source),
            }
        })
        .collect()
}
