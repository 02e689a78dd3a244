//! UPI handle detection.
//!
//! UPI handles (`local@bank`) are machine-generated and identify a
//! counterparty across transactions, so they are the strongest signal a
//! narration can carry. Extraction runs on cleaned text; the handle is
//! returned verbatim because local parts can be case-sensitive.

use anyhow::Result;
use regex::Regex;

/// Finds the first `local@bank` token in a narration.
pub struct UpiIdExtractor {
    handle: Regex,
}

impl UpiIdExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            // 2+ word/dot/hyphen chars, "@", 2+ alphanumerics
            handle: Regex::new(r"[A-Za-z0-9_.-]{2,}@[A-Za-z0-9]{2,}")?,
        })
    }

    /// First handle in `text`, original case preserved.
    pub fn extract<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.handle.find(text).map(|m| m.as_str())
    }
}
