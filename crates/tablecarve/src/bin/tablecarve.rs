//! tablecarve CLI — read a workbook, carve out every border-delimited
//! table, and write each one to its own sheet of a fresh workbook.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tablecarve::{Extractor, SaveDestination, SpreadsheetReader, SpreadsheetWriter, UmyaAdapter};

#[derive(Parser)]
#[command(name = "tablecarve")]
#[command(version)]
#[command(about = "Extract border-delimited tables from a spreadsheet into a new workbook", long_about = None)]
struct Cli {
    /// Input workbook
    #[arg(default_value = "input.xlsx")]
    input: PathBuf,

    /// Output workbook (one sheet per detected table)
    #[arg(default_value = "output.xlsx")]
    output: PathBuf,

    /// Verbose logging (RUST_LOG overrides either way)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut reader = UmyaAdapter::open_path(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;
    let mut writer = UmyaAdapter::new_empty();

    let stats = Extractor::new().run(&mut reader, &mut writer)?;

    writer
        .save_to(SaveDestination::Path(&cli.output))
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    tracing::info!(
        sheets = stats.sheets_scanned,
        tables = stats.tables_found,
        cells = stats.cells_written,
        output = %cli.output.display(),
        "extraction complete"
    );
    Ok(())
}
