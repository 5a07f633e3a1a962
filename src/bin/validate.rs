use anyhow::{Context, Result};
use challenge_eval::{status, validate};
use clap::Parser;
use std::path::PathBuf;

/// Validation stage of the challenge-evaluation pipeline.
#[derive(Parser, Debug)]
#[command(
    name = "validate-submission",
    version,
    about = "Validate prediction files against a gold standard"
)]
struct Args {
    /// Path to the predictions file (or zip containing predictions)
    #[arg(short = 'p', long = "predictions_file", value_name = "PATH")]
    predictions_file: PathBuf,

    /// Folder containing the gold standard file
    #[arg(short = 'g', long = "goldstandard_folder", value_name = "DIR")]
    goldstandard_folder: PathBuf,

    /// Output path for the validation results JSON
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: PathBuf,
}

fn main() -> Result<()> {
    challenge_eval::init_tracing();
    let args = Args::parse();

    let work_dir = std::env::current_dir().context("resolve working directory")?;
    let result = validate::validate_submission(
        &args.predictions_file,
        &args.goldstandard_folder,
        &work_dir,
    )?;
    status::write_validation(&args.output, &result)?;
    println!("{}", result.validation_status);
    Ok(())
}
