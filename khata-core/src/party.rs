//! Party identification: one display label per narration.
//!
//! Strategies are tried in confidence order: UPI handle, fixed
//! transaction category, name-like phrase, raw cleaned text, sentinel.
//! Grouping by the extracted label is an approximation: two rows with
//! the same label are not guaranteed to be the same counterparty.

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::classify::classify;
use crate::clean::NarrationCleaner;
use crate::profile::RuleProfile;
use crate::upi::UpiIdExtractor;

/// Label for rows where nothing survives normalization.
pub const UNIDENTIFIED_PARTY: &str = "Unidentified – Review Required";

/// Which strategy produced a party label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartyKind {
    /// Verbatim UPI handle (machine-generated, highest confidence).
    UpiHandle,
    /// One of the fixed self-describing categories (charges, interest, cash).
    Category,
    /// Title-cased 1-3 token phrase from name extraction.
    Name,
    /// Cleaned narration kept verbatim; nothing better was found.
    RawNarration,
    /// Narration was blank or entirely noise.
    Unidentified,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentifiedParty {
    pub label: String,
    pub kind: PartyKind,
}

impl IdentifiedParty {
    fn new(label: impl Into<String>, kind: PartyKind) -> Self {
        Self { label: label.into(), kind }
    }
}

/// Derives party labels from narrations under one rule profile.
pub struct PartyIdentifier {
    cleaner: NarrationCleaner,
    upi: UpiIdExtractor,
    name_token: Regex,
    stop_words: HashSet<String>,
}

impl PartyIdentifier {
    pub fn new(profile: &RuleProfile) -> Result<Self> {
        Ok(Self {
            cleaner: NarrationCleaner::new(profile)?,
            upi: UpiIdExtractor::new()?,
            // alphabetic runs, internal dots allowed (initialisms, firm names)
            name_token: Regex::new(r"[A-Za-z]+(?:\.[A-Za-z]+)*")?,
            stop_words: profile.stop_word_set(),
        })
    }

    /// Clean `narration` per the profile's noise rules.
    pub fn clean(&self, narration: &str) -> String {
        self.cleaner.clean(narration)
    }

    /// Clean and label in one step.
    pub fn identify(&self, narration: &str) -> IdentifiedParty {
        self.identify_cleaned(&self.clean(narration))
    }

    /// Label an already-cleaned narration.
    pub fn identify_cleaned(&self, cleaned: &str) -> IdentifiedParty {
        if cleaned.is_empty() {
            return IdentifiedParty::new(UNIDENTIFIED_PARTY, PartyKind::Unidentified);
        }

        // Never re-cased: UPI local parts can be case-sensitive.
        if let Some(handle) = self.upi.extract(cleaned) {
            return IdentifiedParty::new(handle, PartyKind::UpiHandle);
        }

        // Fixed categories have no counterparty; routing them through the
        // name extractor would title-case them into fake names.
        let category = classify(cleaned);
        if category.is_fixed_category() {
            return IdentifiedParty::new(category.label(), PartyKind::Category);
        }

        if let Some(name) = self.extract_name(cleaned) {
            return IdentifiedParty::new(name, PartyKind::Name);
        }

        IdentifiedParty::new(cleaned, PartyKind::RawNarration)
    }

    /// First 1-3 non-stop-word tokens of 3+ alphabetic chars, title-cased.
    fn extract_name(&self, cleaned: &str) -> Option<String> {
        let tokens: Vec<&str> = self
            .name_token
            .find_iter(cleaned)
            .map(|m| m.as_str())
            .filter(|t| t.chars().filter(char::is_ascii_alphabetic).count() >= 3)
            .filter(|t| !self.stop_words.contains(&t.to_uppercase()))
            .take(3)
            .collect();

        if tokens.is_empty() {
            return None;
        }
        Some(
            tokens
                .iter()
                .map(|t| title_case(t))
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
