//! CSV exports: all transactions, the party summary, and the
//! review-required subset (the three tables reviewers work from).

use anyhow::{Context, Result};
use khata_core::{NormalizedRecord, PartySummary};
use std::fs;
use std::path::Path;

pub fn write_reports(
    out_dir: &Path,
    records: &[NormalizedRecord],
    summary: &[PartySummary],
) -> Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    write_transactions(&out_dir.join("transactions.csv"), records.iter())?;
    write_summary(&out_dir.join("party_summary.csv"), summary)?;
    write_transactions(
        &out_dir.join("review_required.csv"),
        records.iter().filter(|r| r.needs_review()),
    )?;
    Ok(())
}

fn write_transactions<'a, I>(path: &Path, records: I) -> Result<()>
where
    I: Iterator<Item = &'a NormalizedRecord>,
{
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record([
        "Date",
        "Party",
        "Type",
        "Amount",
        "Narration",
        "Cleaned Narration",
        "Source File",
    ])?;

    for r in records {
        wtr.write_record([
            // unknown dates/amounts export as blank cells, never zeros
            r.date.map(|d| d.to_string()).unwrap_or_default(),
            r.party.clone(),
            r.transaction_type.label().to_string(),
            r.amount.map(|a| format!("{a:.2}")).unwrap_or_default(),
            r.original_narration.clone(),
            r.cleaned_narration.clone(),
            r.source_file.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_summary(path: &Path, summary: &[PartySummary]) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(["Party", "Total Amount"])?;
    for s in summary {
        wtr.write_record([s.party.clone(), format!("{:.2}", s.total_amount)])?;
    }
    wtr.flush()?;
    Ok(())
}
