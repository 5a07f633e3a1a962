//! The shared JSON status record carried across pipeline stages.
//!
//! The validator writes the record; the scorer merges its fields into the same
//! file. The record is schemaless on read so unknown fields written by other
//! pipeline stages pass through a merge untouched.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::Path;

/// Stage outcome as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[serde(rename = "VALIDATED")]
    Validated,
    #[serde(rename = "SCORED")]
    Scored,
    #[serde(rename = "INVALID")]
    Invalid,
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SubmissionStatus::Validated => "VALIDATED",
            SubmissionStatus::Scored => "SCORED",
            SubmissionStatus::Invalid => "INVALID",
        };
        f.write_str(label)
    }
}

/// Fields written by the validation stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub validation_status: SubmissionStatus,
    /// Individual reasons joined with `;`.
    pub validation_errors: String,
}

/// Fields merged in by the scoring stage. Scores are null until a submission
/// is actually scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score1: Option<f64>,
    pub score2: Option<f64>,
    pub score3: Option<f64>,
    pub score_status: SubmissionStatus,
    pub score_errors: String,
}

/// Write the validation fields to `path`. Validation is the first stage, so
/// this overwrites whatever is there.
pub fn write_validation(path: &Path, result: &ValidationResult) -> Result<()> {
    let json = serde_json::to_string(result).context("serialize validation result")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Merge the score fields into the record at `path`, preserving fields written
/// by earlier stages. Read-modify-write; the pipeline runs stages one at a
/// time, so no locking.
pub fn merge_score(path: &Path, result: &ScoreResult) -> Result<()> {
    let mut record = read_record(path)?;
    if let Value::Object(fields) =
        serde_json::to_value(result).context("serialize score result")?
    {
        record.extend(fields);
    }
    let json = serde_json::to_string(&Value::Object(record)).context("serialize status record")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Read the validation status recorded by the previous stage.
///
/// An unrecognized status string is treated as absent; scoring proceeds for
/// anything that is not explicitly INVALID.
pub fn read_validation_status(path: &Path) -> Result<Option<SubmissionStatus>> {
    let record = read_record(path)?;
    Ok(record
        .get("validation_status")
        .and_then(|value| SubmissionStatus::deserialize(value).ok()))
}

/// Load the record as a plain JSON object. A missing or empty file reads as an
/// empty record.
fn read_record(path: &Path) -> Result<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(Map::new());
    }
    let record = serde_json::from_str(&content)
        .with_context(|| format!("parse status record {}", path.display()))?;
    Ok(record)
}
