// Report routing - pick the writer from the output path extension

use std::path::Path;

use jalign_core::config::MatchMode;
use jalign_core::model::AlignResult;

/// Write the run's report artifact: the discrepancy table in ratio mode,
/// the merged alignment in distance mode. Format follows the extension
/// (`.csv` writes CSV, anything else XLSX).
pub fn write_report(
    path: &Path,
    result: &AlignResult,
    max_abbreviations: usize,
) -> Result<(), String> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    match result.meta.mode {
        MatchMode::Ratio => {
            let discrepancies: Vec<_> = result.discrepancies().collect();
            if is_csv {
                crate::csv::write_discrepancies(path, &discrepancies)
            } else {
                crate::xlsx::write_discrepancies(path, &discrepancies)
            }
        }
        MatchMode::Distance => {
            if is_csv {
                crate::csv::write_alignment(path, &result.aligned, max_abbreviations)
            } else {
                crate::xlsx::write_alignment(path, &result.aligned, max_abbreviations)
            }
        }
    }
}
