//! Validation stage: presence and emptiness checks on a submission.

use crate::archive;
use crate::status::{SubmissionStatus, ValidationResult};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Submissions pre-flagged upstream carry this marker in their path; the file
/// body holds the reason.
pub const INVALID_MARKER: &str = "INVALID";

/// Validate a predictions artifact against the gold-standard folder.
///
/// Zip artifacts are extracted into `work_dir` as a side effect; predictions
/// CSVs are discovered there afterwards. File contents are only checked for
/// emptiness — real validation of the prediction format is a later stage of
/// the challenge.
pub fn validate_submission(
    predictions_path: &Path,
    goldstandard_folder: &Path,
    work_dir: &Path,
) -> Result<ValidationResult> {
    if predictions_path.to_string_lossy().contains(INVALID_MARKER) {
        let reason = fs::read_to_string(predictions_path)
            .with_context(|| format!("read {}", predictions_path.display()))?;
        tracing::info!(path = %predictions_path.display(), "submission pre-flagged as invalid");
        return Ok(ValidationResult {
            validation_status: SubmissionStatus::Invalid,
            validation_errors: reason,
        });
    }

    let mut invalid_reasons = Vec::new();

    archive::extract_submission(predictions_path, work_dir)?;
    let predictions_files = archive::find_predictions_files(work_dir)?;
    if predictions_files.is_empty() {
        invalid_reasons.push("No predictions files found".to_string());
    }

    match archive::first_goldstandard_file(goldstandard_folder)? {
        Some(gold_file) => {
            let contents = fs::read_to_string(&gold_file)
                .with_context(|| format!("read {}", gold_file.display()))?;
            if contents.is_empty() {
                invalid_reasons.push("Gold standard file is empty".to_string());
            }
        }
        None => invalid_reasons.push("No gold standard file found".to_string()),
    }

    for file in &predictions_files {
        let contents =
            fs::read_to_string(file).with_context(|| format!("read {}", file.display()))?;
        if contents.is_empty() {
            invalid_reasons.push("At least one predictions file is empty".to_string());
        }
    }

    let validation_status = if invalid_reasons.is_empty() {
        SubmissionStatus::Validated
    } else {
        SubmissionStatus::Invalid
    };
    tracing::info!(status = %validation_status, files = predictions_files.len(), "validated submission");
    Ok(ValidationResult {
        validation_status,
        validation_errors: invalid_reasons.join(";"),
    })
}
