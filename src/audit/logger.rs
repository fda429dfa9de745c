//! JSONL writer and reader for the audit log
//!
//! `spendora history` reads this file back; nothing else does.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{SpendoraError, SpendoraResult};

use super::entry::AuditEntry;

/// Appends created categories and expenses to `audit.log`
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry; the line is flushed before returning
    pub fn log(&self, entry: &AuditEntry) -> SpendoraResult<()> {
        let line = serde_json::to_string(entry)
            .map_err(|e| SpendoraError::Json(format!("Cannot encode history entry: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| self.io_error("open", e))?;
        writeln!(file, "{}", line).map_err(|e| self.io_error("append to", e))?;
        file.flush().map_err(|e| self.io_error("flush", e))
    }

    /// Every entry in the order it was written
    ///
    /// A missing file means nothing has been recorded yet.
    pub fn read_all(&self) -> SpendoraResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path).map_err(|e| self.io_error("open", e))?;

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| self.io_error("read", e))?;
            if let Some(entry) = parse_line(index + 1, &line)? {
                entries.push(entry);
            }
        }

        Ok(entries)
    }

    /// The last `count` entries, oldest of them first
    pub fn read_recent(&self, count: usize) -> SpendoraResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let keep_from = entries.len().saturating_sub(count);
        Ok(entries.split_off(keep_from))
    }

    pub fn entry_count(&self) -> SpendoraResult<usize> {
        self.read_all().map(|entries| entries.len())
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }

    fn io_error(&self, action: &str, err: std::io::Error) -> SpendoraError {
        SpendoraError::Io(format!(
            "Cannot {} history file {}: {}",
            action,
            self.log_path.display(),
            err
        ))
    }
}

fn parse_line(line_no: usize, line: &str) -> SpendoraResult<Option<AuditEntry>> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(line).map(Some).map_err(|e| {
        SpendoraError::Json(format!("History file line {} is corrupt: {}", line_no, e))
    })
}
