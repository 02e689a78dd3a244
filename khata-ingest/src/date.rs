//! Tolerant statement date parsing.
//!
//! Exports mix day-first, ISO, and month-name formats, sometimes with a
//! time part appended. Unparsable cells map to `None` (the row keeps an
//! unknown date) rather than failing the row.

use chrono::{Datelike, Days, NaiveDate};

/// Formats seen across bank exports, day-first variants before US-style.
const FORMATS: &[&str] = &[
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%Y-%m-%d",
    "%d-%b-%Y",
    "%d %b %Y",
    "%d.%m.%Y",
    "%d/%m/%y",
    "%d-%b-%y",
    "%m/%d/%Y",
];

/// Parse a statement date cell.
pub fn parse_statement_date(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }

    for fmt in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(cell, fmt) {
            // "%Y" happily reads "24" as year 24; push such cells on to
            // the two-digit-year formats instead.
            if (1970..=2100).contains(&date.year()) {
                return Some(date);
            }
        }
    }

    // Datetime cells ("01/04/2024 10:31:00") keep their date part.
    let head = cell.split_whitespace().next()?;
    if head != cell {
        return parse_statement_date(head);
    }
    None
}

/// Excel serial day to calendar date (1900 date system, epoch 1899-12-30).
pub fn from_excel_serial(serial: f64) -> Option<NaiveDate> {
    if serial <= 0.0 || serial > 2_958_465.0 {
        return None;
    }
    NaiveDate::from_ymd_opt(1899, 12, 30)?.checked_add_days(Days::new(serial as u64))
}
