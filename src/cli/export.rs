//! CLI command for data export
//!
//! Writes expenses as CSV, JSON or YAML to a file or to stdout.

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{SpendoraError, SpendoraResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transactions only)
    Csv,
    /// JSON format (categories and transactions)
    Json,
    /// YAML format (categories and transactions, human-readable)
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the `export` command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> SpendoraResult<()> {
    match &args.output {
        Some(output) => {
            let file = File::create(output).map_err(|e| {
                SpendoraError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| SpendoraError::Export(e.to_string()))?;

            let count = storage.transactions().count()?;
            eprintln!("Exported {} transactions to: {}", count, output.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, args.format, &mut writer)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    storage: &Storage,
    format: ExportFormat,
    writer: &mut W,
) -> SpendoraResult<()> {
    match format {
        ExportFormat::Csv => csv::export_transactions_csv(storage, writer),
        ExportFormat::Json => json::export_full_json(storage, writer, true),
        ExportFormat::Yaml => yaml::export_full_yaml(storage, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendoraPaths;
    use crate::services::CategoryService;
    use tempfile::TempDir;

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(SpendoraPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        CategoryService::new(&storage).add("Food").unwrap();

        let output = temp_dir.path().join("export.json");
        handle_export_command(
            &storage,
            ExportArgs {
                format: ExportFormat::Json,
                output: Some(output.clone()),
            },
        )
        .unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        let parsed: json::FullExport = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.categories[0].name, "Food");
    }
}
