//! CLI command for the audit history
//!
//! Shows the most recent entries of the audit log.

use clap::Args;

use crate::error::SpendoraResult;
use crate::storage::Storage;

/// Arguments for `history`
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(short = 'n', long, default_value = "20")]
    pub count: usize,
}

/// Handle the `history` command
pub fn handle_history_command(storage: &Storage, args: HistoryArgs) -> SpendoraResult<()> {
    let entries = storage.audit().read_recent(args.count)?;

    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
