//! Keyword classification of cleaned narrations.
//!
//! An ordered decision list over the uppercased narration: the first rule
//! with any matching keyword wins and later rules are never consulted.
//! Total function; anything unmatched is `Unidentified`.

use serde::{Deserialize, Serialize};

/// Transaction-type category derived from the narration text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "bank-charges")]
    BankCharges,
    #[serde(rename = "bank-interest")]
    BankInterest,
    #[serde(rename = "cash-deposit")]
    CashDeposit,
    #[serde(rename = "cash-withdrawal")]
    CashWithdrawal,
    #[serde(rename = "transfer")]
    Transfer,
    #[serde(rename = "unidentified")]
    Unidentified,
}

impl TransactionType {
    /// Display label, also used as the party label for fixed categories.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::BankCharges => "Bank Charges",
            TransactionType::BankInterest => "Bank Interest",
            TransactionType::CashDeposit => "Cash Deposit",
            TransactionType::CashWithdrawal => "Cash Withdrawal",
            TransactionType::Transfer => "Transfer",
            TransactionType::Unidentified => "Unidentified",
        }
    }

    /// Self-describing categories with no real counterparty to extract.
    pub fn is_fixed_category(&self) -> bool {
        matches!(
            self,
            TransactionType::BankCharges
                | TransactionType::BankInterest
                | TransactionType::CashDeposit
                | TransactionType::CashWithdrawal
        )
    }
}

struct KeywordRule {
    any_of: &'static [&'static str],
    outcome: TransactionType,
}

/// Ordered decision list; first matching rule wins.
///
/// `"INT "` keeps its trailing space so INTO/PRINTED and the like never
/// read as interest.
const RULES: &[KeywordRule] = &[
    KeywordRule {
        any_of: &["AMC", "CHARGE", "CHG", "FEE"],
        outcome: TransactionType::BankCharges,
    },
    KeywordRule {
        any_of: &["INTEREST", "INT "],
        outcome: TransactionType::BankInterest,
    },
    KeywordRule {
        any_of: &["CASH DEP", "CASH DEPOSIT"],
        outcome: TransactionType::CashDeposit,
    },
    KeywordRule {
        any_of: &["CASH WDL", "ATM WDL"],
        outcome: TransactionType::CashWithdrawal,
    },
    KeywordRule {
        any_of: &["UPI", "IMPS", "NEFT", "RTGS"],
        outcome: TransactionType::Transfer,
    },
];

/// Classify a cleaned narration. Pure and total.
pub fn classify(cleaned: &str) -> TransactionType {
    let text = cleaned.to_uppercase();
    for rule in RULES {
        if rule.any_of.iter().any(|k| text.contains(k)) {
            return rule.outcome;
        }
    }
    TransactionType::Unidentified
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charges_keywords() {
        assert_eq!(classify("AMC CHARGES MAR24"), TransactionType::BankCharges);
        assert_eq!(classify("sms chg q4"), TransactionType::BankCharges);
        assert_eq!(classify("PROCESSING FEE"), TransactionType::BankCharges);
    }

    #[test]
    fn test_interest_keywords() {
        assert_eq!(classify("SAVING INTEREST CREDIT"), TransactionType::BankInterest);
        assert_eq!(classify("SB INT 4.5 CREDITED"), TransactionType::BankInterest);
    }

    #[test]
    fn test_int_needs_trailing_space() {
        // INTO / trailing INT do not read as interest
        assert_eq!(classify("PAYMENT INTO ACCOUNT"), TransactionType::Unidentified);
        assert_eq!(classify("STATEMENT REPRINT"), TransactionType::Unidentified);
    }

    #[test]
    fn test_cash_movements() {
        assert_eq!(classify("CASH DEP BRANCH KOTA"), TransactionType::CashDeposit);
        assert_eq!(classify("CASH DEPOSIT MACHINE"), TransactionType::CashDeposit);
        assert_eq!(classify("ATM WDL PNS MAIN RD"), TransactionType::CashWithdrawal);
        assert_eq!(classify("CASH WDL SELF"), TransactionType::CashWithdrawal);
    }

    #[test]
    fn test_transfer_rails() {
        for text in ["UPI JOHN", "IMPS P2A", "NEFT SALARY", "RTGS VENDOR"] {
            assert_eq!(classify(text), TransactionType::Transfer, "{text}");
        }
    }

    #[test]
    fn test_first_rule_wins() {
        // charges beat interest beat transfer, whatever the word order
        assert_eq!(classify("UPI INTEREST CHARGE"), TransactionType::BankCharges);
        assert_eq!(classify("NEFT INT PAID"), TransactionType::BankInterest);
        assert_eq!(classify("CASH DEP VIA UPI"), TransactionType::CashDeposit);
    }

    #[test]
    fn test_unmatched_is_unidentified() {
        assert_eq!(classify(""), TransactionType::Unidentified);
        assert_eq!(classify("JOHN DOE PAYMENT"), TransactionType::Unidentified);
    }
}
