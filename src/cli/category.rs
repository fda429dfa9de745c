//! Category CLI commands
//!
//! Implements CLI commands for listing and creating categories.

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::SpendoraResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> SpendoraResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let categories = service.list_all()?;
            print!("{}", format_category_list(&categories));
        }

        CategoryCommands::Add { name } => {
            let category = service.add(&name)?;
            println!("Created category: {}", category.name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendoraPaths;
    use tempfile::TempDir;

    #[test]
    fn test_add_then_duplicate() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(SpendoraPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();

        handle_category_command(
            &storage,
            CategoryCommands::Add {
                name: "Food".into(),
            },
        )
        .unwrap();

        let err = handle_category_command(
            &storage,
            CategoryCommands::Add {
                name: " Food ".into(),
            },
        )
        .unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(storage.categories().count().unwrap(), 1);
    }
}
