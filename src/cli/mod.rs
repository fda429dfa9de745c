//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod export;
pub mod history;
pub mod report;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use history::{handle_history_command, HistoryArgs};
pub use report::{handle_report_command, ReportArgs, ReportType};
pub use transaction::{handle_add_command, handle_list_command, AddArgs, ListArgs};
