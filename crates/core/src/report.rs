//! Alignment reporting: accepted-match rewrites, the merged outer join, and
//! the run summary.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::config::MatchMode;
use crate::model::{
    AbbreviationRecord, AlignInput, AlignSummary, AlignedRecord, JournalRecord, MatchResult,
};

/// Accepted matches as a journal-side → abbreviation-side rewrite of
/// normalized names. Unaccepted results contribute nothing; their names join
/// unchanged.
pub fn rewrite_map(matches: &[MatchResult]) -> HashMap<String, String> {
    matches
        .iter()
        .filter(|m| m.matched)
        .map(|m| (m.source_name.clone(), m.candidate_name.clone()))
        .collect()
}

/// Full outer join of both record sets on the (possibly rewritten)
/// normalized name.
///
/// One row per distinct join key; the first record wins when several on one
/// side share a key. Rows carrying a journal name sort by that name
/// ascending; abbreviation-only rows follow, ordered by join key.
pub fn outer_join(
    journals: &[JournalRecord],
    abbreviations: &[AbbreviationRecord],
    rewrites: &HashMap<String, String>,
) -> Vec<AlignedRecord> {
    let mut merged: BTreeMap<String, (Option<&JournalRecord>, Option<&AbbreviationRecord>)> =
        BTreeMap::new();

    for journal in journals {
        let key = rewrites
            .get(&journal.normalized)
            .unwrap_or(&journal.normalized);
        let entry = merged.entry(key.clone()).or_default();
        if entry.0.is_none() {
            entry.0 = Some(journal);
        }
    }

    for abbrev in abbreviations {
        let entry = merged.entry(abbrev.normalized.clone()).or_default();
        if entry.1.is_none() {
            entry.1 = Some(abbrev);
        }
    }

    let mut rows: Vec<AlignedRecord> = merged
        .into_iter()
        .map(|(key, (journal, abbrev))| AlignedRecord {
            key,
            journal_name: journal.map(|j| j.name.clone()),
            impact_factor: journal.map(|j| j.impact_factor),
            abbreviations: abbrev.map(|a| a.abbreviations.clone()).unwrap_or_default(),
        })
        .collect();

    rows.sort_by(|a, b| match (&a.journal_name, &b.journal_name) {
        (Some(x), Some(y)) => x.cmp(y).then_with(|| a.key.cmp(&b.key)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.key.cmp(&b.key),
    });

    rows
}

/// Matched/discrepant/unmatched counts surfaced after every run.
pub fn compute_summary(
    mode: MatchMode,
    input: &AlignInput,
    matches: &[MatchResult],
    aligned: &[AlignedRecord],
) -> AlignSummary {
    let (exact, fuzzy, discrepant, unmatched) = match mode {
        MatchMode::Ratio => {
            let exact = matches.iter().filter(|m| m.matched).count();
            let unmatched = matches
                .iter()
                .filter(|m| m.candidate_name == crate::model::NO_MATCH_FOUND)
                .count();
            let discrepant = matches.len() - exact;
            (exact, 0, discrepant, unmatched)
        }
        MatchMode::Distance => {
            // Names present on both sides never reach the matcher.
            let right: HashSet<&str> = input
                .abbreviations
                .iter()
                .map(|a| a.normalized.as_str())
                .collect();
            let left: HashSet<&str> = input
                .journals
                .iter()
                .map(|j| j.normalized.as_str())
                .collect();
            let exact = left.intersection(&right).count();
            let fuzzy = matches.iter().filter(|m| m.matched).count();
            let unmatched = matches.len() - fuzzy;
            (exact, fuzzy, 0, unmatched)
        }
    };

    AlignSummary {
        journals: input.journals.len(),
        abbreviations: input.abbreviations.len(),
        exact,
        fuzzy,
        discrepant,
        unmatched,
        rows: aligned.len(),
    }
}
