//! Party-wise aggregation of normalized records.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::normalize::NormalizedRecord;

/// Total cash flow for one party label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartySummary {
    pub party: String,
    pub total_amount: f64,
}

/// Fold records into per-party totals.
///
/// Rows with unknown amounts keep their party in the summary but add
/// nothing to its total. Output is ordered by descending absolute total;
/// equal totals keep first-encounter order (the sort is stable).
pub fn summarize(records: &[NormalizedRecord]) -> Vec<PartySummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<PartySummary> = Vec::new();

    for rec in records {
        let slot = *index.entry(rec.party.as_str()).or_insert_with(|| {
            out.push(PartySummary {
                party: rec.party.clone(),
                total_amount: 0.0,
            });
            out.len() - 1
        });
        if let Some(amount) = rec.amount {
            out[slot].total_amount += amount;
        }
    }

    out.sort_by(|a, b| {
        b.total_amount
            .abs()
            .partial_cmp(&a.total_amount.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    out
}
