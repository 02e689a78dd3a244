//! Narration noise stripping.
//!
//! Bank exports embed UTR/reference tokens, long numeric IDs, and
//! separator punctuation in the narration. Cleaning removes them in a
//! fixed order: reference-like alphanumeric tokens first, then bare digit
//! runs, then separators. Running the token pass before the digit pass
//! keeps a partially-alphabetic token from surviving as a digit fragment.

use anyhow::Result;
use regex::Regex;

use crate::profile::RuleProfile;

/// Characters banks use to delimit narration segments.
const SEPARATORS: [char; 4] = ['/', '-', '*', '#'];

/// Strips reference noise from raw narrations.
pub struct NarrationCleaner {
    ref_token: Regex,
    digit_run: Regex,
}

impl NarrationCleaner {
    pub fn new(profile: &RuleProfile) -> Result<Self> {
        Ok(Self {
            // UTR/cheque-style tokens: 8+ uppercase letters or digits
            ref_token: Regex::new(r"\b[A-Z0-9]{8,}\b")?,
            digit_run: Regex::new(&format!(r"\b\d{{{},}}\b", profile.digit_run_threshold))?,
        })
    }

    /// Clean one narration. Total: any input yields a (possibly empty)
    /// string, never an error.
    pub fn clean(&self, narration: &str) -> String {
        let text = self.ref_token.replace_all(narration, " ");
        let text = self.digit_run.replace_all(&text, " ");
        let text: String = text
            .chars()
            .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
            .collect();
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
