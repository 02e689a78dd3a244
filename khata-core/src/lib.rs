//! khata-core: narration-normalization pipeline for bank-statement rows.
//!
//! Turns free-text transaction narrations into a canonical party label and
//! a transaction-type category, one row at a time. Every step is a pure,
//! total function of a single row; the only multi-row operation is the
//! party-wise summary fold.

pub mod classify;
pub mod clean;
pub mod normalize;
pub mod party;
pub mod profile;
pub mod summary;
pub mod upi;

pub use classify::{TransactionType, classify};
pub use clean::NarrationCleaner;
pub use normalize::{NormalizedRecord, RawRow, RowNormalizer};
pub use party::{IdentifiedParty, PartyIdentifier, PartyKind, UNIDENTIFIED_PARTY};
pub use profile::RuleProfile;
pub use summary::{PartySummary, summarize};
pub use upi::UpiIdExtractor;
