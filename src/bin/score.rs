use anyhow::{Context, Result};
use challenge_eval::{score, status};
use clap::Parser;
use std::path::PathBuf;

/// Scoring stage of the challenge-evaluation pipeline.
#[derive(Parser, Debug)]
#[command(
    name = "score-submission",
    version,
    about = "Score a validated predictions file and update the results JSON"
)]
struct Args {
    /// Path to the predictions file (or zip containing predictions)
    #[arg(short = 'p', long = "predictions_file", value_name = "PATH")]
    predictions_file: PathBuf,

    /// Gold standard file or folder; accepted for pipeline-interface
    /// consistency but unused by the placeholder scorer
    #[arg(short = 'g', long = "goldstandard", value_name = "PATH")]
    #[allow(dead_code)]
    goldstandard: PathBuf,

    /// Results JSON written by the validation stage; score fields are merged
    /// into it
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: PathBuf,
}

fn main() -> Result<()> {
    challenge_eval::init_tracing();
    let args = Args::parse();

    let prior_status = status::read_validation_status(&args.output)?;
    let work_dir = std::env::current_dir().context("resolve working directory")?;
    let result = score::score_submission(&args.predictions_file, prior_status, &work_dir);
    status::merge_score(&args.output, &result)?;
    println!("{}", result.score_status);
    Ok(())
}
