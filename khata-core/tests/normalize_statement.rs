use chrono::NaiveDate;
use khata_core::{
    PartyKind, RawRow, RowNormalizer, RuleProfile, TransactionType, UNIDENTIFIED_PARTY, summarize,
};

fn row(day: u32, narration: Option<&str>, credit: Option<f64>, debit: Option<f64>) -> RawRow {
    RawRow {
        date: NaiveDate::from_ymd_opt(2024, 3, day),
        narration: narration.map(|s| s.to_string()),
        debit,
        credit,
        source_file: "march.xlsx".to_string(),
    }
}

/// A month of mixed narrations: every identification strategy should fire,
/// and the summary must conserve the batch total.
#[test]
fn test_statement_end_to_end() {
    let normalizer = RowNormalizer::new(&RuleProfile::default()).unwrap();

    let rows = vec![
        row(1, Some("UPI/9876543210/JOHN DOE/SBIN0001234/Payment"), Some(500.0), None),
        row(3, Some("NEFT-jane.doe@okaxis-SALARY REF 99112233"), Some(42_000.0), None),
        row(5, Some("AMC CHARGES MAR24"), None, Some(150.0)),
        row(8, Some("ATM WDL PNS MAIN RD 00442211"), None, Some(2_000.0)),
        row(12, Some("SB INT 4.5 CREDITED"), Some(88.5), None),
        row(15, Some("UPI/9876543210/JOHN DOE/SBIN0001234/Payment"), None, Some(120.0)),
        row(20, None, None, Some(75.0)),
        row(25, Some("CASH DEP BRANCH KOTA"), Some(10_000.0), None),
    ];

    let records = normalizer.normalize_all(&rows);
    assert_eq!(records.len(), rows.len());

    // one label per strategy
    assert_eq!(records[0].party, "John Doe Payment");
    assert_eq!(records[0].party_kind, PartyKind::Name);
    assert_eq!(records[1].party, "jane.doe@okaxis");
    assert_eq!(records[1].party_kind, PartyKind::UpiHandle);
    assert_eq!(records[2].party, "Bank Charges");
    assert_eq!(records[3].party, "Cash Withdrawal");
    assert_eq!(records[4].party, "Bank Interest");
    assert_eq!(records[6].party, UNIDENTIFIED_PARTY);
    assert_eq!(records[7].party, "Cash Deposit");

    // same narration groups under the same label across rows
    assert_eq!(records[0].party, records[5].party);

    // categories line up with the labels
    assert_eq!(records[1].transaction_type, TransactionType::Transfer);
    assert_eq!(records[2].transaction_type, TransactionType::BankCharges);
    assert_eq!(records[4].transaction_type, TransactionType::BankInterest);

    let review: Vec<_> = records.iter().filter(|r| r.needs_review()).collect();
    assert_eq!(review.len(), 1);
    assert_eq!(review[0].amount, Some(-75.0));

    // aggregation conserves the total and merges the repeated party
    let summary = summarize(&records);
    let record_sum: f64 = records.iter().filter_map(|r| r.amount).sum();
    let summary_sum: f64 = summary.iter().map(|s| s.total_amount).sum();
    assert!((record_sum - summary_sum).abs() < 1e-9);

    let john = summary.iter().find(|s| s.party == "John Doe Payment").unwrap();
    assert!((john.total_amount - 380.0).abs() < 1e-9);

    // biggest absolute mover first
    assert_eq!(summary[0].party, "jane.doe@okaxis");
}

/// Re-cleaning is a no-op: classification is stable under it.
#[test]
fn test_classify_stable_under_recleaning() {
    let normalizer = RowNormalizer::new(&RuleProfile::default()).unwrap();

    for raw in [
        "UPI/9876543210/JOHN DOE/SBIN0001234/Payment",
        "AMC CHARGES MAR24",
        "CASH DEP BRANCH KOTA",
        "random text with no rails",
        "",
    ] {
        let rec = normalizer.normalize(&row(1, Some(raw), None, None));
        let re_rec = normalizer.normalize(&row(1, Some(&rec.cleaned_narration), None, None));
        assert_eq!(re_rec.transaction_type, rec.transaction_type, "{raw:?}");
        assert_eq!(re_rec.cleaned_narration, rec.cleaned_narration, "{raw:?}");
    }
}

/// A regional profile with a different vocabulary coexists with the default.
#[test]
fn test_profiles_are_independent() {
    let default_norm = RowNormalizer::new(&RuleProfile::default()).unwrap();

    let mut regional = RuleProfile::default();
    regional.bank_codes.push("CIMB".to_string());
    let regional_norm = RowNormalizer::new(&regional).unwrap();

    let raw = row(1, Some("NEFT CIMB ALICE TAN"), Some(10.0), None);
    assert_eq!(default_norm.normalize(&raw).party, "Cimb Alice Tan");
    assert_eq!(regional_norm.normalize(&raw).party, "Alice Tan");
}
