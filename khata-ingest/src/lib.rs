//! khata-ingest: statement ingestion (CSV/XLSX) and column auto-detection.
//!
//! Everything here is best-effort glue around the core pipeline: a
//! malformed cell becomes an absent field, a malformed row a partial
//! `RawRow`, and only an unreadable file surfaces an error, which the
//! caller is expected to log and skip rather than fail the batch on.

pub mod columns;
pub mod csv_source;
pub mod date;
pub mod xlsx_source;

pub use columns::ColumnMap;
pub use csv_source::{read_csv_from, read_csv_statement};
pub use xlsx_source::read_xlsx_statement;

use anyhow::{Result, bail};
use khata_core::RawRow;
use std::path::Path;

/// Read one statement export, dispatching on the file extension.
pub fn read_statement(path: &Path) -> Result<Vec<RawRow>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => read_csv_statement(path),
        "xlsx" | "xls" => read_xlsx_statement(path),
        other => bail!("unsupported statement format .{other}: {}", path.display()),
    }
}

/// File-name tag carried on every row of a statement.
pub(crate) fn source_tag(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("statement")
        .to_string()
}
