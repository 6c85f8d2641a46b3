//! geez: convert between Arabic integers and Ge'ez numerals.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use geez_core::persistence::{load_or_new, save_history};
use geez_core::{convert_auto, decode, decode_strict, encode, ConversionRecord, HistoryConfig};
use tracing::warn;

#[derive(Parser)]
#[command(name = "geez", version, about = "Convert between Arabic integers and Ge'ez numerals")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Arabic integer to Ge'ez numeral.
    To {
        /// A non-negative integer.
        value: String,
    },

    /// Ge'ez numeral to Arabic integer.
    From {
        numeral: String,

        /// Reject unknown glyphs and non-canonical spellings.
        #[arg(long)]
        strict: bool,
    },

    /// Convert every line of a file, guessing each line's direction.
    Batch {
        file: PathBuf,

        /// Print the results as a JSON array.
        #[arg(long)]
        json: bool,

        /// Append the successful conversions to this history file.
        #[arg(long, env = "GEEZ_HISTORY")]
        history: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::To { value } => match encode(value.as_str()) {
            Ok(numeral) => {
                println!("✅ Arabic: {}", value.trim());
                println!("➡️  Ge'ez: {}", numeral);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::From { numeral, strict } => {
            let value = if strict {
                match decode_strict(&numeral) {
                    Ok(value) => value,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                decode(&numeral)
            };
            println!("✅ Ge'ez: {}", numeral);
            println!("➡️  Arabic: {}", value);
            ExitCode::SUCCESS
        }
        Commands::Batch { file, json, history } => match run_batch(&file, json, history) {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

/// Returns `Ok(false)` if any line failed to convert.
fn run_batch(file: &Path, json: bool, history_path: Option<PathBuf>) -> geez_core::Result<bool> {
    let contents = fs::read_to_string(file)?;
    let mut records: Vec<ConversionRecord> = Vec::new();
    let mut all_ok = true;

    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match convert_auto(line) {
            Ok(record) => records.push(record),
            Err(e) => {
                eprintln!("line {}: {}", index + 1, e);
                all_ok = false;
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("{}\t{}", record.input, record.output);
        }
    }

    if let Some(path) = history_path {
        let mut history = load_or_new(&path, HistoryConfig::default());
        for record in records {
            history.record(record);
        }
        if let Err(e) = save_history(&history, &path) {
            warn!(path = %path.display(), %e, "could not save history");
        }
    }

    Ok(all_ok)
}
