// XLSX import/export

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use rust_xlsxwriter::{Format, Workbook as XlsxWorkbook};

use jalign_core::config::InputConfig;
use jalign_core::ingest;
use jalign_core::model::{AlignInput, AlignedRecord, MatchResult};

/// Read both tables from one workbook (xlsx, xls, xlsb, ods).
///
/// Sheets are located by the configured names; the first row of each sheet
/// is a header row and is skipped. Cell values are taken as displayed
/// strings (zero-fraction floats print as integers, matching how the
/// curated lists show ids and impact factors).
pub fn read_input(path: &Path, input: &InputConfig) -> Result<AlignInput, String> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| format!("failed to open workbook {}: {e}", path.display()))?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();

    let journal_rows = sheet_rows(&mut workbook, &sheet_names, &input.journals_sheet)?;
    let abbrev_rows = sheet_rows(&mut workbook, &sheet_names, &input.abbreviations_sheet)?;

    let journals = ingest::journals_from_rows(data_rows(&journal_rows))
        .map_err(|e| format!("sheet '{}': {e}", input.journals_sheet))?;
    let abbreviations = ingest::abbreviations_from_rows(data_rows(&abbrev_rows))
        .map_err(|e| format!("sheet '{}': {e}", input.abbreviations_sheet))?;

    Ok(AlignInput {
        journals,
        abbreviations,
    })
}

/// Everything after the header row.
fn data_rows(rows: &[Vec<String>]) -> &[Vec<String>] {
    if rows.is_empty() {
        rows
    } else {
        &rows[1..]
    }
}

fn sheet_rows(
    workbook: &mut calamine::Sheets<std::io::BufReader<std::fs::File>>,
    sheet_names: &[String],
    name: &str,
) -> Result<Vec<Vec<String>>, String> {
    if !sheet_names.iter().any(|s| s == name) {
        return Err(format!(
            "sheet '{name}' not found (workbook has: {})",
            sheet_names.join(", ")
        ));
    }

    let range = workbook
        .worksheet_range(name)
        .map_err(|e| format!("failed to read sheet '{name}': {e}"))?;

    let mut rows = Vec::new();
    for row in range.rows() {
        rows.push(row.iter().map(cell_to_string).collect());
    }
    Ok(rows)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            // Integers without decimals
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{n}")
            }
        }
        Data::Int(n) => format!("{n}"),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::Error(e) => format!("#{e:?}"),
        Data::DateTime(dt) => format!("{}", dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

/// Write the ratio-mode discrepancy report: one row per source name whose
/// best candidate fell short of an exact normalized match.
pub fn write_discrepancies(path: &Path, discrepancies: &[&MatchResult]) -> Result<(), String> {
    let mut workbook = XlsxWorkbook::new();
    let worksheet = workbook
        .add_worksheet()
        .set_name("discrepancies")
        .map_err(|e| format!("failed to create sheet: {e}"))?;

    let header = Format::new().set_bold();
    worksheet
        .write_string_with_format(0, 0, "source_name", &header)
        .and_then(|ws| ws.write_string_with_format(0, 1, "candidate_name", &header))
        .and_then(|ws| ws.write_string_with_format(0, 2, "similarity_score", &header))
        .map_err(|e| format!("failed to write header: {e}"))?;

    for (i, m) in discrepancies.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet
            .write_string(row, 0, &m.source_name)
            .and_then(|ws| ws.write_string(row, 1, &m.candidate_name))
            .and_then(|ws| ws.write_number(row, 2, m.score))
            .map_err(|e| format!("failed to write row {row}: {e}"))?;
    }

    workbook
        .save(path)
        .map_err(|e| format!("failed to save {}: {e}", path.display()))?;
    Ok(())
}

/// Write the merged alignment table, `max_abbreviations` abbreviation
/// columns wide. Missing sides stay blank.
pub fn write_alignment(
    path: &Path,
    aligned: &[AlignedRecord],
    max_abbreviations: usize,
) -> Result<(), String> {
    let mut workbook = XlsxWorkbook::new();
    let worksheet = workbook
        .add_worksheet()
        .set_name("alignment")
        .map_err(|e| format!("failed to create sheet: {e}"))?;

    let header = Format::new().set_bold();
    worksheet
        .write_string_with_format(0, 0, "journal_name", &header)
        .and_then(|ws| ws.write_string_with_format(0, 1, "impact_factor", &header))
        .map_err(|e| format!("failed to write header: {e}"))?;
    for k in 0..max_abbreviations {
        worksheet
            .write_string_with_format(0, (2 + k) as u16, &format!("abbreviation_{}", k + 1), &header)
            .map_err(|e| format!("failed to write header: {e}"))?;
    }

    for (i, record) in aligned.iter().enumerate() {
        let row = (i + 1) as u32;
        if let Some(ref name) = record.journal_name {
            worksheet
                .write_string(row, 0, name)
                .map_err(|e| format!("failed to write row {row}: {e}"))?;
        }
        if let Some(impact) = record.impact_factor {
            worksheet
                .write_number(row, 1, impact)
                .map_err(|e| format!("failed to write row {row}: {e}"))?;
        }
        for (k, abbrev) in record.abbreviations.iter().take(max_abbreviations).enumerate() {
            if !abbrev.is_empty() {
                worksheet
                    .write_string(row, (2 + k) as u16, abbrev)
                    .map_err(|e| format!("failed to write row {row}: {e}"))?;
            }
        }
    }

    workbook
        .save(path)
        .map_err(|e| format!("failed to save {}: {e}", path.display()))?;
    Ok(())
}
