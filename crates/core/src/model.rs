use serde::Serialize;

use crate::config::MatchMode;

// ---------------------------------------------------------------------------
// Input records
// ---------------------------------------------------------------------------

/// A journal from the canonical impact-factor list. Immutable after load;
/// `normalized` is computed once at ingestion.
#[derive(Debug, Clone, Serialize)]
pub struct JournalRecord {
    pub id: String,
    pub name: String,
    pub impact_factor: f64,
    pub normalized: String,
}

/// A journal from the abbreviation list, with its 0..N abbreviations in
/// column order.
#[derive(Debug, Clone, Serialize)]
pub struct AbbreviationRecord {
    pub name: String,
    pub abbreviations: Vec<String>,
    pub normalized: String,
}

/// Pre-loaded record sets, one per curated list.
#[derive(Debug, Clone)]
pub struct AlignInput {
    pub journals: Vec<JournalRecord>,
    pub abbreviations: Vec<AbbreviationRecord>,
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Sentinel candidate recorded when the candidate set is empty.
pub const NO_MATCH_FOUND: &str = "no match found";

/// Best candidate found for one source name. A low score or unset `matched`
/// flag is data to report, never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub source_name: String,
    pub candidate_name: String,
    pub score: f64,
    pub matched: bool,
}

impl MatchResult {
    /// Result for a source scanned against an empty candidate set.
    pub fn no_match(source_name: &str) -> Self {
        Self {
            source_name: source_name.to_string(),
            candidate_name: NO_MATCH_FOUND.to_string(),
            score: 0.0,
            matched: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Alignment output
// ---------------------------------------------------------------------------

/// One row of the merged outer join, keyed by the (possibly rewritten)
/// normalized name. A side that had no record for the key is `None`/empty.
#[derive(Debug, Clone, Serialize)]
pub struct AlignedRecord {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_factor: Option<f64>,
    pub abbreviations: Vec<String>,
}

impl AlignedRecord {
    pub fn empty(key: String) -> Self {
        Self {
            key,
            journal_name: None,
            impact_factor: None,
            abbreviations: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Summary + result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct AlignSummary {
    /// Journal records after ingestion filtering.
    pub journals: usize,
    /// Abbreviation records after ingestion filtering.
    pub abbreviations: usize,
    /// Names identical on both sides after normalization.
    pub exact: usize,
    /// Names paired by an accepted fuzzy match (distance mode).
    pub fuzzy: usize,
    /// Names whose best candidate fell short of exact (ratio mode).
    pub discrepant: usize,
    /// Names with no accepted candidate at all.
    pub unmatched: usize,
    /// Rows in the merged alignment, one per distinct join key.
    pub rows: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlignMeta {
    pub config_name: String,
    pub mode: MatchMode,
    pub engine_version: String,
    pub run_at: String,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlignResult {
    pub meta: AlignMeta,
    pub summary: AlignSummary,
    /// Per-source best-match tuples, in source order.
    pub matches: Vec<MatchResult>,
    /// Merged outer join of both record sets.
    pub aligned: Vec<AlignedRecord>,
    /// Non-fatal degradations (e.g. an empty candidate set).
    pub warnings: Vec<String>,
}

impl AlignResult {
    /// Ratio-mode report rows: every source whose best candidate was not an
    /// exact normalized match, sentinel rows included.
    pub fn discrepancies(&self) -> impl Iterator<Item = &MatchResult> {
        self.matches.iter().filter(|m| !m.matched)
    }
}
