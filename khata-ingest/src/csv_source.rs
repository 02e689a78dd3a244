//! CSV statement reader.
//!
//! Bank CSV exports carry preamble rows (account holder, branch, blank
//! lines) before the actual header, so the reader scans for the first row
//! that detects as a statement header and treats everything after it as
//! data. Individual cells are salvaged independently; a bad cell becomes
//! an absent field, never a failed row.

use anyhow::{Context, Result};
use khata_core::RawRow;
use std::io::Read;
use std::path::Path;

use crate::columns::ColumnMap;
use crate::date::parse_statement_date;

pub fn read_csv_statement(path: &Path) -> Result<Vec<RawRow>> {
    let file =
        std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_csv_from(file, &crate::source_tag(path))
}

/// Parse statement CSV from any reader; `source_file` tags every row.
pub fn read_csv_from<R: Read>(reader: R, source_file: &str) -> Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut columns: Option<ColumnMap> = None;
    let mut rows = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let cells: Vec<&str> = record.iter().map(|c| c.trim()).collect();

        let Some(map) = &columns else {
            let candidate = ColumnMap::detect(&cells);
            if candidate.is_usable() {
                columns = Some(candidate);
            }
            continue;
        };

        if cells.iter().all(|c| c.is_empty()) {
            continue;
        }

        rows.push(RawRow {
            date: cell(&cells, map.date).and_then(parse_statement_date),
            narration: cell(&cells, map.narration).map(str::to_string),
            debit: cell(&cells, map.debit).and_then(parse_amount),
            credit: cell(&cells, map.credit).and_then(parse_amount),
            source_file: source_file.to_string(),
        });
    }

    Ok(rows)
}

fn cell<'a>(cells: &[&'a str], idx: Option<usize>) -> Option<&'a str> {
    idx.and_then(|i| cells.get(i))
        .copied()
        .filter(|c| !c.is_empty())
}

/// Parse an amount cell: thousands separators and currency marks are
/// dropped, anything else unparsable maps to `None` (unknown, not zero).
pub(crate) fn parse_amount(cell: &str) -> Option<f64> {
    let cleaned: String = cell
        .chars()
        .filter(|c| !matches!(c, ',' | '₹' | '$' | ' '))
        .collect();
    cleaned.parse().ok()
}
