//! Shared plumbing for the challenge-evaluation pipeline stages.
//!
//! The two binaries (`validate-submission`, `score-submission`) are thin CLI
//! front-ends; artifact handling, the status record, and the stage logic all
//! live here so both stages read and write the same shapes.

pub mod archive;
pub mod score;
pub mod status;
pub mod validate;

use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber for a pipeline binary.
///
/// Logs go to stderr; stdout is reserved for the stage's status string.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
