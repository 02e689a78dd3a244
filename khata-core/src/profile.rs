//! Rule profile: the configurable vocabulary of the pipeline.
//!
//! Bank-code words and reference-number conventions vary by region, so
//! everything the pipeline matches against lives in a plain serde value
//! rather than in code. Several profiles can coexist in one process (one
//! per statement batch, say); there is no module-level state.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default minimum length of a bare digit run stripped as a numeric ID.
pub const DEFAULT_DIGIT_RUN_THRESHOLD: usize = 10;

const DEFAULT_STOP_WORDS: &[&str] = &[
    "WDL", "DEP", "TFR", "UPI", "IMPS", "NEFT", "RTGS", "DR", "CR", "ATM",
    "CASH", "CARD", "TXN", "TRANSFER",
];

const DEFAULT_BANK_CODES: &[&str] = &[
    "UBIN", "BARB", "YBL", "AXL", "AXIS", "ICICI", "HDFC", "SBI", "SBIN",
    "PNB", "BOB", "YES", "IDFC", "KOTAK", "PAYTM",
];

/// Tunable rule set for cleaning and party identification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleProfile {
    /// Digit runs of this length or longer are treated as numeric IDs.
    pub digit_run_threshold: usize,
    /// Transaction vocabulary never taken as a party name (WDL, TFR, ...).
    pub stop_words: Vec<String>,
    /// Bank/IFSC-style code words, also excluded from party names.
    pub bank_codes: Vec<String>,
}

impl Default for RuleProfile {
    fn default() -> Self {
        Self {
            digit_run_threshold: DEFAULT_DIGIT_RUN_THRESHOLD,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            bank_codes: DEFAULT_BANK_CODES.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl RuleProfile {
    /// Uppercased union of stop words and bank codes.
    pub fn stop_word_set(&self) -> HashSet<String> {
        self.stop_words
            .iter()
            .chain(self.bank_codes.iter())
            .map(|w| w.to_uppercase())
            .collect()
    }
}
