//! Record construction from positional row data.
//!
//! Both tables arrive as rows of strings (workbook cells or CSV fields) with
//! the header row already stripped. Ingestion is the only fatal stage: a
//! malformed table aborts the run here, before any matching. Rows whose name
//! normalizes to the empty string are dropped, never errors; the matcher
//! must only ever see non-empty normalized names.

use crate::error::AlignError;
use crate::model::{AbbreviationRecord, JournalRecord};
use crate::normalize::normalize;

/// Journal table column names, in position order.
const JOURNAL_COLUMNS: [&str; 3] = ["id", "name", "impact_factor"];

/// Build journal records from `(id, name, impact_factor)` rows.
///
/// Blank rows and rows with a blank name or blank impact factor are dropped.
/// A short row or an unparseable impact factor is fatal.
pub fn journals_from_rows(rows: &[Vec<String>]) -> Result<Vec<JournalRecord>, AlignError> {
    let mut records = Vec::with_capacity(rows.len());

    for (idx, row) in rows.iter().enumerate() {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        if row.len() < JOURNAL_COLUMNS.len() {
            return Err(AlignError::MissingColumn {
                table: "journals".into(),
                column: JOURNAL_COLUMNS[row.len()].into(),
            });
        }

        let name = row[1].trim();
        let normalized = normalize(name);
        if normalized.is_empty() {
            continue;
        }

        let impact_raw = row[2].trim();
        if impact_raw.is_empty() {
            continue;
        }
        let impact_factor: f64 = impact_raw.parse().map_err(|_| AlignError::ImpactFactorParse {
            row: idx + 1,
            value: impact_raw.into(),
        })?;

        records.push(JournalRecord {
            id: row[0].trim().to_string(),
            name: name.to_string(),
            impact_factor,
            normalized,
        });
    }

    Ok(records)
}

/// Build abbreviation records from `(name, abbreviation_1..k)` rows.
///
/// Trailing columns that are empty in every row are dropped table-wide;
/// within a record, trailing empty cells are trimmed while interior empties
/// keep their column position.
pub fn abbreviations_from_rows(rows: &[Vec<String>]) -> Result<Vec<AbbreviationRecord>, AlignError> {
    // Width of the used portion of the table.
    let used_cols = rows
        .iter()
        .map(|row| {
            row.iter()
                .rposition(|cell| !cell.trim().is_empty())
                .map_or(0, |p| p + 1)
        })
        .max()
        .unwrap_or(0);

    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let Some(name_cell) = row.first() else {
            continue;
        };
        let name = name_cell.trim();
        let normalized = normalize(name);
        if normalized.is_empty() {
            continue;
        }

        let width = used_cols.min(row.len());
        let mut abbreviations: Vec<String> = row[1..width]
            .iter()
            .map(|cell| cell.trim().to_string())
            .collect();
        while abbreviations.last().is_some_and(|a| a.is_empty()) {
            abbreviations.pop();
        }

        records.push(AbbreviationRecord {
            name: name.to_string(),
            abbreviations,
            normalized,
        });
    }

    Ok(records)
}

/// CSV front-end for [`journals_from_rows`]. Expects a header row.
pub fn journals_from_csv(data: &str) -> Result<Vec<JournalRecord>, AlignError> {
    journals_from_rows(&csv_rows(data)?)
}

/// CSV front-end for [`abbreviations_from_rows`]. Expects a header row;
/// records may have varying field counts.
pub fn abbreviations_from_csv(data: &str) -> Result<Vec<AbbreviationRecord>, AlignError> {
    abbreviations_from_rows(&csv_rows(data)?)
}

fn csv_rows(data: &str) -> Result<Vec<Vec<String>>, AlignError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| AlignError::Io(e.to_string()))?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }
    Ok(rows)
}
