//! YAML Export functionality
//!
//! Same document as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{SpendoraError, SpendoraResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full database to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> SpendoraResult<()> {
    let export = FullExport::from_storage(storage)?;
    let to_export_err = |e: std::io::Error| SpendoraError::Export(e.to_string());

    writeln!(writer, "# Spendora Expense Export").map_err(to_export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(to_export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(to_export_err)?;
    writeln!(writer).map_err(to_export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SpendoraError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendoraPaths;
    use crate::services::CategoryService;
    use tempfile::TempDir;

    #[test]
    fn test_yaml_export_parses_back() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(SpendoraPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        CategoryService::new(&storage).add("Food").unwrap();

        let mut buffer = Vec::new();
        export_full_yaml(&storage, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("# Spendora Expense Export"));

        let parsed: FullExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.categories.len(), 1);
        assert!(parsed.transactions.is_empty());
    }
}
