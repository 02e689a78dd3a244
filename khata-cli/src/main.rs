use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use khata_core::{NormalizedRecord, RowNormalizer, summarize};
use std::path::PathBuf;

mod profile_store;
mod report;

#[derive(Parser, Debug)]
#[command(name = "khata", version, about = "Bank-statement party normalisation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize statement exports and write the cleaned tables
    Normalize {
        /// Statement files (.csv, .xlsx, .xls); unreadable files are skipped
        files: Vec<PathBuf>,

        /// Output directory for the exported tables
        #[arg(long, default_value = "out")]
        out: PathBuf,

        /// Rule profile TOML (default: built-in firm standard)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Print the party summary instead of writing files
        #[arg(long, default_value_t = false)]
        summary_only: bool,
    },

    /// Rule profile management
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// Write the default rule profile as TOML for editing
    Init {
        #[arg(long, default_value = "khata-profile.toml")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Normalize { files, out, profile, summary_only } => {
            run_normalize(files, out, profile, summary_only)
        }
        Command::Profile { command } => match command {
            ProfileCommand::Init { path } => profile_store::init_profile(&path),
        },
    }
}

fn run_normalize(
    files: Vec<PathBuf>,
    out: PathBuf,
    profile: Option<PathBuf>,
    summary_only: bool,
) -> Result<()> {
    if files.is_empty() {
        bail!("no input files (pass one or more .csv/.xlsx statements)");
    }

    let profile = profile_store::load_profile(profile.as_deref())?;
    let normalizer = RowNormalizer::new(&profile)?;

    let mut records: Vec<NormalizedRecord> = Vec::new();
    for path in &files {
        match khata_ingest::read_statement(path) {
            Ok(rows) => {
                tracing::info!(file = %path.display(), rows = rows.len(), "ingested statement");
                records.extend(normalizer.normalize_all(&rows));
            }
            Err(err) => {
                tracing::warn!(file = %path.display(), error = %err, "skipping file");
            }
        }
    }

    if records.is_empty() {
        bail!("no rows ingested from {} file(s)", files.len());
    }

    let summary = summarize(&records);
    let review = records.iter().filter(|r| r.needs_review()).count();

    println!("Normalized {} rows from {} file(s)", records.len(), files.len());
    println!("Parties: {} | review required: {}", summary.len(), review);

    if summary_only {
        for s in &summary {
            println!("{:>14.2}  {}", s.total_amount, s.party);
        }
        return Ok(());
    }

    report::write_reports(&out, &records, &summary)?;
    println!("Wrote cleaned tables to {}", out.display());
    Ok(())
}
