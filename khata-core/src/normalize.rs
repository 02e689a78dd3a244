//! Row normalization: one `RawRow` in, one `NormalizedRecord` out.
//!
//! Purely per-row; no state is shared across rows or files, so batches
//! can be processed in any order (or in parallel) without coordination.

use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classify::{TransactionType, classify};
use crate::party::{PartyIdentifier, PartyKind, UNIDENTIFIED_PARTY};
use crate::profile::RuleProfile;

/// One statement row as the ingestion layer hands it over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    pub date: Option<NaiveDate>,
    pub narration: Option<String>,
    pub debit: Option<f64>,
    pub credit: Option<f64>,
    pub source_file: String,
}

/// Normalized output, one per input row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub date: Option<NaiveDate>,
    pub party: String,
    pub party_kind: PartyKind,
    pub transaction_type: TransactionType,
    /// Inflow positive: credit minus debit. `None` when neither leg parsed.
    pub amount: Option<f64>,
    pub original_narration: String,
    pub cleaned_narration: String,
    pub source_file: String,
}

impl NormalizedRecord {
    /// Rows routed to manual review (sentinel party label).
    pub fn needs_review(&self) -> bool {
        self.party.contains(UNIDENTIFIED_PARTY)
    }
}

/// Applies the full pipeline to rows under one rule profile.
pub struct RowNormalizer {
    identifier: PartyIdentifier,
}

impl RowNormalizer {
    pub fn new(profile: &RuleProfile) -> Result<Self> {
        Ok(Self {
            identifier: PartyIdentifier::new(profile)?,
        })
    }

    /// Normalize one row. Total: malformed input degrades to fallback
    /// values, it never fails.
    pub fn normalize(&self, row: &RawRow) -> NormalizedRecord {
        let original = row.narration.clone().unwrap_or_default();
        let cleaned = self.identifier.clean(&original);
        let party = self.identifier.identify_cleaned(&cleaned);

        NormalizedRecord {
            date: row.date,
            party: party.label,
            party_kind: party.kind,
            transaction_type: classify(&cleaned),
            amount: signed_amount(row.credit, row.debit),
            original_narration: original,
            cleaned_narration: cleaned,
            source_file: row.source_file.clone(),
        }
    }

    /// Normalize a batch, preserving input order.
    pub fn normalize_all(&self, rows: &[RawRow]) -> Vec<NormalizedRecord> {
        rows.iter().map(|r| self.normalize(r)).collect()
    }
}

/// Signed amount, inflow positive. Both legs known: credit minus debit.
/// One leg: that leg with its natural sign. Neither: unknown, never zero.
fn signed_amount(credit: Option<f64>, debit: Option<f64>) -> Option<f64> {
    match (credit, debit) {
        (Some(c), Some(d)) => Some(c - d),
        (Some(c), None) => Some(c),
        (None, Some(d)) => Some(-d),
        (None, None) => None,
    }
}
