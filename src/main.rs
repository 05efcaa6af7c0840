//! Scores a binary-classification submission.
//!
//! Usage:
//!   subset-scorer --input_dir ./input --output_dir ./output
//!   subset-scorer --input_dir ./input --output_dir ./output --id-column id --json

use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use subset_scorer::tables::Alignment;
use subset_scorer::tasks::{ScoringConfig, ScoringOutcome, SubmissionScoring};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "subset-scorer")]
#[command(about = "Score a binary submission against public/private gold labels")]
#[command(version)]
struct Args {
    /// Directory holding `res/` (one submission file) and `ref/` (one reference file)
    #[arg(long = "input_dir", visible_alias = "input-dir")]
    input_dir: PathBuf,

    /// Directory receiving public_scores.txt and all_scores.txt (created if missing;
    /// empty means the current directory)
    #[arg(
        long = "output_dir",
        visible_alias = "output-dir",
        value_parser = clap::builder::ValueParser::os_string()
    )]
    output_dir: OsString,

    /// Join submission and reference rows on this column instead of row order
    #[arg(long, env = "SCORER_ID_COLUMN")]
    id_column: Option<String>,

    /// Print the scores to stdout as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn into_config(self) -> ScoringConfig {
        let alignment = self
            .id_column
            .map(Alignment::ByKey)
            .unwrap_or_default();
        ScoringConfig::new(self.input_dir, PathBuf::from(self.output_dir))
            .with_alignment(alignment)
    }
}

fn run(config: ScoringConfig) -> Result<ScoringOutcome> {
    tracing::info!(input = %config.input_dir.display(), output = %config.output_dir.display(), "scoring submission");

    let outcome = SubmissionScoring::new(config)
        .run()
        .context("scoring failed")?;

    tracing::info!(
        public = %outcome.reports.public.display(),
        all = %outcome.reports.all.display(),
        "reports written"
    );
    Ok(outcome)
}

fn render_json(outcome: &ScoringOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let json = args.json;
    let outcome = run(args.into_config())?;

    if json {
        println!("{}", render_json(&outcome)?);
    }

    Ok(())
}
