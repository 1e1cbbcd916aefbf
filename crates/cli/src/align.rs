//! `jalign run` / `jalign validate` — config-driven list alignment.

use std::path::{Path, PathBuf};

use jalign_core::{AlignConfig, MatchMode};

use crate::exit_codes::{EXIT_ALIGN_DISCREPANT, EXIT_ALIGN_INVALID_CONFIG, EXIT_ALIGN_RUNTIME};
use crate::CliError;

fn align_err(code: u8, msg: impl Into<String>) -> CliError {
    CliError {
        code,
        message: msg.into(),
        hint: None,
    }
}

pub fn cmd_run(
    config_path: PathBuf,
    json_output: bool,
    output_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(&config_path)
        .map_err(|e| align_err(EXIT_ALIGN_RUNTIME, format!("cannot read config: {e}")))?;

    let config = AlignConfig::from_toml(&config_str)
        .map_err(|e| align_err(EXIT_ALIGN_INVALID_CONFIG, e.to_string()))?;

    // Resolve file paths relative to the config file's directory
    let base_dir = config_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    let input = load_input(&base_dir, &config)?;

    let result = jalign_core::run(&config, &input)
        .map_err(|e| align_err(EXIT_ALIGN_RUNTIME, e.to_string()))?;

    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }

    // Report artifact per config
    if let Some(ref report_file) = config.output.file {
        let report_path = base_dir.join(report_file);
        jalign_io::report::write_report(&report_path, &result, config.output.max_abbreviations)
            .map_err(|e| align_err(EXIT_ALIGN_RUNTIME, e))?;
        eprintln!("wrote {}", report_path.display());
    }

    // JSON output
    let json_str = serde_json::to_string_pretty(&result)
        .map_err(|e| align_err(EXIT_ALIGN_RUNTIME, format!("JSON serialization error: {e}")))?;

    if let Some(ref path) = output_file {
        std::fs::write(path, &json_str)
            .map_err(|e| align_err(EXIT_ALIGN_RUNTIME, format!("cannot write output: {e}")))?;
        eprintln!("wrote {}", path.display());
    }

    if json_output {
        println!("{json_str}");
    }

    // Human summary to stderr
    let s = &result.summary;
    eprintln!(
        "{} alignment: {} journals vs {} abbreviations — {} exact, {} fuzzy, {} discrepant, {} unmatched, {} output rows",
        result.meta.mode, s.journals, s.abbreviations, s.exact, s.fuzzy, s.discrepant, s.unmatched, s.rows,
    );

    let inconsistent = match result.meta.mode {
        MatchMode::Ratio => s.discrepant,
        MatchMode::Distance => s.unmatched,
    };
    if inconsistent > 0 {
        return Err(align_err(
            EXIT_ALIGN_DISCREPANT,
            format!("{inconsistent} name(s) did not align"),
        ));
    }

    Ok(())
}

pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(&config_path)
        .map_err(|e| align_err(EXIT_ALIGN_RUNTIME, format!("cannot read config: {e}")))?;

    match AlignConfig::from_toml(&config_str) {
        Ok(config) => {
            eprintln!(
                "valid: {} alignment '{}' reading '{}'",
                config.mode, config.name, config.input.file,
            );
            Ok(())
        }
        Err(e) => Err(align_err(EXIT_ALIGN_INVALID_CONFIG, e.to_string())),
    }
}

/// Load both record sets: one workbook with two sheets, or a CSV pair when
/// `abbreviations_file` is configured.
fn load_input(
    base_dir: &Path,
    config: &AlignConfig,
) -> Result<jalign_core::AlignInput, CliError> {
    let journals_path = base_dir.join(&config.input.file);

    let loaded = match config.input.abbreviations_file {
        Some(ref abbrevs_file) => {
            let abbrevs_path = base_dir.join(abbrevs_file);
            jalign_io::csv::read_input(&journals_path, &abbrevs_path)
        }
        None => jalign_io::xlsx::read_input(&journals_path, &config.input),
    };

    loaded.map_err(|e| align_err(EXIT_ALIGN_RUNTIME, e))
}
