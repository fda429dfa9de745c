use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use spendora::cli::{
    handle_add_command, handle_category_command, handle_export_command, handle_history_command,
    handle_list_command, handle_report_command, AddArgs, CategoryCommands, ExportArgs,
    HistoryArgs, ListArgs, ReportArgs,
};
use spendora::config::{paths::SpendoraPaths, settings::Settings};
use spendora::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendora",
    version,
    about = "Track personal expenses from the command line",
    long_about = "Spendora records expenses with a category and a date, lists them \
                  with filters, and summarizes spending by category, month or year."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List expenses, newest first
    List(ListArgs),

    /// Category management commands
    #[command(subcommand, alias = "category")]
    Categories(CategoryCommands),

    /// Summarize spending
    Report(ReportArgs),

    /// Export expenses as CSV, JSON or YAML
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History(HistoryArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let paths = SpendoraPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;

    match command {
        Commands::Add(args) => handle_add_command(&storage, &settings, args)?,
        Commands::List(args) => handle_list_command(&storage, &settings, args)?,
        Commands::Categories(cmd) => handle_category_command(&storage, cmd)?,
        Commands::Report(args) => handle_report_command(&storage, &settings, args)?,
        Commands::Export(args) => handle_export_command(&storage, args)?,
        Commands::History(args) => handle_history_command(&storage, args)?,
        Commands::Config => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }

            println!("Spendora Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Database:       {}", paths.database_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Date format:        {}", settings.date_format);
            println!("  Default category:   {}", settings.default_category);
            println!("  Default list limit: {}", settings.default_list_limit);
        }
    }

    Ok(())
}
