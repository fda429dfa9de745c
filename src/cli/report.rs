//! CLI command for reports
//!
//! Generates spending summaries grouped by category or by month.

use clap::{Args, ValueEnum};

use crate::config::settings::Settings;
use crate::error::{SpendoraError, SpendoraResult};
use crate::models::{Month, Year};
use crate::reports::{ReportKind, SummaryReport};
use crate::storage::Storage;

/// Report type options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportType {
    /// Totals per category for one month (current month by default)
    Monthly,
    /// Totals per category across all time, a month, or a year
    Category,
    /// Totals per month for one year (current year by default)
    Yearly,
}

impl From<ReportType> for ReportKind {
    fn from(value: ReportType) -> Self {
        match value {
            ReportType::Monthly => ReportKind::Monthly,
            ReportType::Category => ReportKind::Category,
            ReportType::Yearly => ReportKind::Yearly,
        }
    }
}

/// Arguments for `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Kind of report to generate
    #[arg(short = 't', long = "type", value_enum, default_value = "monthly")]
    pub report_type: ReportType,

    /// Month to report on (MM-YYYY)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Year to report on (YYYY)
    #[arg(short, long)]
    pub year: Option<String>,
}

/// Handle the `report` command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    args: ReportArgs,
) -> SpendoraResult<()> {
    let month = args
        .month
        .as_deref()
        .map(Month::parse)
        .transpose()
        .map_err(|e| SpendoraError::Validation(e.to_string()))?;
    let year = args
        .year
        .as_deref()
        .map(Year::parse)
        .transpose()
        .map_err(|e| SpendoraError::Validation(e.to_string()))?;

    let report = SummaryReport::generate(storage, args.report_type.into(), month, year)?;
    print!("{}", report.format_terminal(&settings.currency_symbol));

    Ok(())
}
