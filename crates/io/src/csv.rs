// CSV import/export

use std::io::Read;
use std::path::Path;

use jalign_core::ingest;
use jalign_core::model::{AlignInput, AlignedRecord, MatchResult};

/// Read the two tables from a pair of CSV files.
pub fn read_input(journals_path: &Path, abbreviations_path: &Path) -> Result<AlignInput, String> {
    let journals_data = read_file_as_utf8(journals_path)?;
    let abbrevs_data = read_file_as_utf8(abbreviations_path)?;

    let journals = ingest::journals_from_csv(&journals_data)
        .map_err(|e| format!("{}: {e}", journals_path.display()))?;
    let abbreviations = ingest::abbreviations_from_csv(&abbrevs_data)
        .map_err(|e| format!("{}: {e}", abbreviations_path.display()))?;

    Ok(AlignInput {
        journals,
        abbreviations,
    })
}

/// Read file and convert to UTF-8 if needed (Excel-exported CSVs are often
/// Windows-1252).
pub fn read_file_as_utf8(path: &Path) -> Result<String, String> {
    let mut file = std::fs::File::open(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;

    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

/// Write the ratio-mode discrepancy report as CSV.
pub fn write_discrepancies(path: &Path, discrepancies: &[&MatchResult]) -> Result<(), String> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| e.to_string())?;

    writer
        .write_record(["source_name", "candidate_name", "similarity_score"])
        .map_err(|e| e.to_string())?;
    for m in discrepancies {
        writer
            .write_record([
                m.source_name.as_str(),
                m.candidate_name.as_str(),
                &format_score(m.score),
            ])
            .map_err(|e| e.to_string())?;
    }

    writer.flush().map_err(|e| e.to_string())?;
    Ok(())
}

/// Write the merged alignment table as CSV, `max_abbreviations` abbreviation
/// columns wide.
pub fn write_alignment(
    path: &Path,
    aligned: &[AlignedRecord],
    max_abbreviations: usize,
) -> Result<(), String> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| e.to_string())?;

    let mut header = vec!["journal_name".to_string(), "impact_factor".to_string()];
    for k in 0..max_abbreviations {
        header.push(format!("abbreviation_{}", k + 1));
    }
    writer.write_record(&header).map_err(|e| e.to_string())?;

    for record in aligned {
        let mut row = vec![
            record.journal_name.clone().unwrap_or_default(),
            record.impact_factor.map(format_score).unwrap_or_default(),
        ];
        for k in 0..max_abbreviations {
            row.push(record.abbreviations.get(k).cloned().unwrap_or_default());
        }
        writer.write_record(&row).map_err(|e| e.to_string())?;
    }

    writer.flush().map_err(|e| e.to_string())?;
    Ok(())
}

/// Integers without decimals, everything else as-is.
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{}", score as i64)
    } else {
        format!("{score}")
    }
}
