//! XLSX statement reader.
//!
//! Same header-scan contract as the CSV reader, over calamine cells.
//! Native numeric and datetime cells are used directly; string cells go
//! through the same tolerant parsers as CSV text.

use anyhow::{Context, Result, bail};
use calamine::{Data, Range, Reader, open_workbook_auto};
use chrono::NaiveDate;
use khata_core::RawRow;
use std::path::Path;

use crate::columns::ColumnMap;
use crate::csv_source::parse_amount;
use crate::date::{from_excel_serial, parse_statement_date};

pub fn read_xlsx_statement(path: &Path) -> Result<Vec<RawRow>> {
    let mut workbook =
        open_workbook_auto(path).with_context(|| format!("opening {}", path.display()))?;
    let source = crate::source_tag(path);

    // First sheet with a recognizable statement header wins.
    let sheet_names = workbook.sheet_names().to_vec();
    for name in &sheet_names {
        let Ok(range) = workbook.worksheet_range(name) else {
            continue;
        };
        let rows = sheet_rows(&range, &source);
        if !rows.is_empty() {
            return Ok(rows);
        }
    }
    bail!("no sheet with a statement header in {}", path.display())
}

fn sheet_rows(range: &Range<Data>, source_file: &str) -> Vec<RawRow> {
    let mut columns: Option<ColumnMap> = None;
    let mut out = Vec::new();

    for row in range.rows() {
        let Some(map) = &columns else {
            let headers: Vec<String> = row.iter().map(cell_text).collect();
            let candidate = ColumnMap::detect(&headers);
            if candidate.is_usable() {
                columns = Some(candidate);
            }
            continue;
        };

        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }

        out.push(RawRow {
            date: cell_at(row, map.date).and_then(cell_date),
            narration: cell_at(row, map.narration)
                .map(cell_text)
                .filter(|s| !s.is_empty()),
            debit: cell_at(row, map.debit).and_then(cell_amount),
            credit: cell_at(row, map.credit).and_then(cell_amount),
            source_file: source_file.to_string(),
        });
    }

    out
}

fn cell_at(row: &[Data], idx: Option<usize>) -> Option<&Data> {
    idx.and_then(|i| row.get(i))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

fn cell_amount(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => parse_amount(s),
        _ => None,
    }
}

fn cell_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::DateTime(dt) => from_excel_serial(dt.as_f64()),
        Data::Float(f) => from_excel_serial(*f),
        Data::String(s) => parse_statement_date(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_amount_variants() {
        assert_eq!(cell_amount(&Data::Float(150.5)), Some(150.5));
        assert_eq!(cell_amount(&Data::Int(42)), Some(42.0));
        assert_eq!(cell_amount(&Data::String("1,234.00".to_string())), Some(1234.0));
        assert_eq!(cell_amount(&Data::Empty), None);
        assert_eq!(cell_amount(&Data::String("n/a".to_string())), None);
    }

    #[test]
    fn test_cell_date_variants() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 31);
        assert_eq!(cell_date(&Data::Float(45_382.0)), expected);
        assert_eq!(cell_date(&Data::String("31/03/2024".to_string())), expected);
        assert_eq!(cell_date(&Data::Empty), None);
    }

    #[test]
    fn test_sheet_rows_scan_for_header() {
        let cells = vec![
            vec![Data::String("Statement of Account".to_string())],
            vec![
                Data::String("Date".to_string()),
                Data::String("Particulars".to_string()),
                Data::String("Debit".to_string()),
                Data::String("Credit".to_string()),
            ],
            vec![
                Data::String("01/03/2024".to_string()),
                Data::String("CASH DEP BRANCH".to_string()),
                Data::Empty,
                Data::Float(10_000.0),
            ],
        ];

        let mut range: Range<Data> = Range::new((0, 0), (2, 3));
        for (r, row) in cells.into_iter().enumerate() {
            for (c, cell) in row.into_iter().enumerate() {
                range.set_value((r as u32, c as u32), cell);
            }
        }

        let rows = sheet_rows(&range, "march.xlsx");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(rows[0].narration.as_deref(), Some("CASH DEP BRANCH"));
        assert_eq!(rows[0].credit, Some(10_000.0));
        assert_eq!(rows[0].debit, None);
    }
}
