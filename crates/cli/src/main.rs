// jalign CLI - headless journal-list alignment

mod align;
mod exit_codes;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::EXIT_SUCCESS;

#[derive(Parser)]
#[command(name = "jalign")]
#[command(about = "Align two curated journal-name lists by fuzzy matching")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an alignment from a TOML config file
    #[command(after_help = "\
Exit code 1 indicates the lists did not fully align: discrepant names in
ratio mode, unmatched names in distance mode. The report is still written.

Examples:
  jalign run align.toml
  jalign run align.toml --json
  jalign run align.toml --output result.json")]
    Run {
        /// Path to the .toml config file
        config: PathBuf,

        /// Output JSON to stdout instead of human summary only
        #[arg(long)]
        json: bool,

        /// Write JSON output to file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate an alignment config without running
    #[command(after_help = "\
Examples:
  jalign validate align.toml")]
    Validate {
        /// Path to the .toml config file
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            json,
            output,
        } => align::cmd_run(config, json, output),
        Commands::Validate { config } => align::cmd_validate(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError {
            code,
            message,
            hint,
        }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}
