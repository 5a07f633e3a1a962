//! Scoring stage: placeholder scores for a validated submission.

use crate::archive;
use crate::status::{ScoreResult, SubmissionStatus};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Score a submission given the validation status recorded by the previous
/// stage.
///
/// An INVALID submission is never scored. Errors raised while extracting or
/// reading predictions are downgraded to an INVALID result rather than
/// aborting the pipeline stage.
pub fn score_submission(
    predictions_path: &Path,
    prior_status: Option<SubmissionStatus>,
    work_dir: &Path,
) -> ScoreResult {
    if prior_status == Some(SubmissionStatus::Invalid) {
        tracing::info!("skipping scoring for invalid submission");
        return unscored("Submission was not scored due to INVALID status");
    }

    match try_score(predictions_path, work_dir) {
        Ok(result) => result,
        Err(err) => {
            tracing::warn!(error = %err, "scoring failed");
            unscored(&format!("Error {err:#} occurred while scoring"))
        }
    }
}

fn try_score(predictions_path: &Path, work_dir: &Path) -> Result<ScoreResult> {
    archive::extract_submission(predictions_path, work_dir)?;
    let predictions_files = archive::find_predictions_files(work_dir)?;
    if predictions_files.is_empty() {
        return Ok(unscored("No predictions files found"));
    }

    for file in &predictions_files {
        // Contents are read but not consulted; the placeholder metric below
        // does not depend on them.
        fs::read_to_string(file).with_context(|| format!("read {}", file.display()))?;
    }

    // Placeholder scoring until the challenge metric is defined.
    let score1 = 1.0 + 1.0;
    let score2 = score1 * 2.0;
    let score3 = score1 * 3.0;
    tracing::info!(files = predictions_files.len(), "scored submission");

    Ok(ScoreResult {
        score1: Some(score1),
        score2: Some(score2),
        score3: Some(score3),
        score_status: SubmissionStatus::Scored,
        score_errors: String::new(),
    })
}

fn unscored(message: &str) -> ScoreResult {
    ScoreResult {
        score1: None,
        score2: None,
        score3: None,
        score_status: SubmissionStatus::Invalid,
        score_errors: message.to_string(),
    }
}
