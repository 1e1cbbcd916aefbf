use std::collections::HashSet;
use std::time::Instant;

use crate::config::{AlignConfig, MatchMode};
use crate::error::AlignError;
use crate::matcher::{match_by_distance, match_by_ratio};
use crate::model::{AlignInput, AlignMeta, AlignResult};
use crate::report;

/// Run an alignment pass per config. Returns match results, the merged
/// alignment, and a summary.
///
/// Matching and reporting never abort once ingestion has produced the input;
/// an empty record set degrades every match in that direction and is
/// surfaced as a warning, not an error.
pub fn run(config: &AlignConfig, input: &AlignInput) -> Result<AlignResult, AlignError> {
    let start = Instant::now();

    let matches = match config.mode {
        MatchMode::Ratio => {
            let sources = distinct_in_order(input.journals.iter().map(|j| j.normalized.as_str()));
            let candidates =
                distinct_in_order(input.abbreviations.iter().map(|a| a.normalized.as_str()));
            match_by_ratio(&sources, &candidates)
        }
        MatchMode::Distance => {
            let left = distinct_in_order(input.journals.iter().map(|j| j.normalized.as_str()));
            let right =
                distinct_in_order(input.abbreviations.iter().map(|a| a.normalized.as_str()));

            let left_set: HashSet<&str> = left.iter().map(String::as_str).collect();
            let right_set: HashSet<&str> = right.iter().map(String::as_str).collect();

            let left_only: Vec<String> = left
                .iter()
                .filter(|name| !right_set.contains(name.as_str()))
                .cloned()
                .collect();
            let right_only: Vec<String> = right
                .iter()
                .filter(|name| !left_set.contains(name.as_str()))
                .cloned()
                .collect();

            match_by_distance(&left_only, &right_only, config.threshold.max_distance)
        }
    };

    let rewrites = report::rewrite_map(&matches);
    let aligned = report::outer_join(&input.journals, &input.abbreviations, &rewrites);
    let summary = report::compute_summary(config.mode, input, &matches, &aligned);

    let mut warnings = Vec::new();
    if input.journals.is_empty() {
        warnings.push("journal list is empty; output holds only abbreviation rows".into());
    }
    if input.abbreviations.is_empty() {
        warnings.push(
            "abbreviation list is empty; every journal is reported as no match found".into(),
        );
    }

    Ok(AlignResult {
        meta: AlignMeta {
            config_name: config.name.clone(),
            mode: config.mode,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
            duration_ms: start.elapsed().as_millis() as u64,
        },
        summary,
        matches,
        aligned,
        warnings,
    })
}

/// Distinct names in first-encountered order. Matching order is what makes
/// tie-breaks deterministic, so the load order of the records is preserved.
fn distinct_in_order<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for name in names {
        if seen.insert(name) {
            out.push(name.to_string());
        }
    }
    out
}
