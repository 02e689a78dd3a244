//! Header-row column detection.
//!
//! Bank exports disagree on header spelling ("Narration", "Description",
//! "Particulars", "Withdrawal Amt.", "DR", ...), so canonical fields are
//! found by case-insensitive substring match rather than exact names.

const NARRATION_KEYS: &[&str] = &["desc", "particular", "narration", "details"];
const DEBIT_KEYS: &[&str] = &["withdraw", "debit", "dr"];
const CREDIT_KEYS: &[&str] = &["deposit", "credit", "cr"];

/// Indices of the canonical statement columns within a header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: Option<usize>,
    pub narration: Option<usize>,
    pub debit: Option<usize>,
    pub credit: Option<usize>,
}

impl ColumnMap {
    /// Map arbitrary export headers to canonical fields. The first header
    /// matching a field wins; each header binds at most one field.
    pub fn detect<S: AsRef<str>>(headers: &[S]) -> ColumnMap {
        let mut map = ColumnMap::default();
        for (i, header) in headers.iter().enumerate() {
            let h = header.as_ref().to_lowercase();
            if map.date.is_none() && h.contains("date") {
                map.date = Some(i);
            } else if map.narration.is_none() && NARRATION_KEYS.iter().any(|k| h.contains(k)) {
                map.narration = Some(i);
            } else if map.debit.is_none() && DEBIT_KEYS.iter().any(|k| h.contains(k)) {
                map.debit = Some(i);
            } else if map.credit.is_none() && CREDIT_KEYS.iter().any(|k| h.contains(k)) {
                map.credit = Some(i);
            }
        }
        map
    }

    /// A row counts as the statement header once it names at least a date
    /// and a narration column.
    pub fn is_usable(&self) -> bool {
        self.date.is_some() && self.narration.is_some()
    }
}
