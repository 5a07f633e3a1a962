//! Submission artifact handling: zip extraction and file discovery.

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extract a zipped submission into `work_dir`, flattening entry paths.
///
/// Zip detection matches the pipeline convention: any file name containing
/// `.zip` is treated as an archive. Non-zip artifacts are left untouched.
pub fn extract_submission(predictions_path: &Path, work_dir: &Path) -> Result<()> {
    let is_zip = predictions_path
        .file_name()
        .map(|name| name.to_string_lossy().contains(".zip"))
        .unwrap_or(false);
    if !is_zip {
        return Ok(());
    }

    let file = fs::File::open(predictions_path)
        .with_context(|| format!("open {}", predictions_path.display()))?;
    let mut zip = zip::ZipArchive::new(file)
        .with_context(|| format!("read zip {}", predictions_path.display()))?;

    for index in 0..zip.len() {
        let mut entry = zip
            .by_index(index)
            .with_context(|| format!("read zip entry {index}"))?;
        if entry.is_dir() {
            continue;
        }
        // Keep only the base name so archive-internal directories are not
        // recreated under the working directory.
        let Some(name) = Path::new(entry.name())
            .file_name()
            .map(|name| name.to_os_string())
        else {
            continue;
        };
        let dest = work_dir.join(name);
        let mut out =
            fs::File::create(&dest).with_context(|| format!("create {}", dest.display()))?;
        io::copy(&mut entry, &mut out).with_context(|| format!("extract {}", dest.display()))?;
        tracing::debug!(entry = %dest.display(), "extracted submission entry");
    }
    Ok(())
}

/// Predictions files are whatever `*.csv` files sit in the working directory
/// after extraction, in glob order.
pub fn find_predictions_files(work_dir: &Path) -> Result<Vec<PathBuf>> {
    glob_paths(&work_dir.join("*.csv"))
}

/// The gold standard is the first entry of the folder in glob order; the rest
/// are ignored.
pub fn first_goldstandard_file(folder: &Path) -> Result<Option<PathBuf>> {
    Ok(glob_paths(&folder.join("*"))?.into_iter().next())
}

fn glob_paths(pattern: &Path) -> Result<Vec<PathBuf>> {
    let pattern = pattern
        .to_str()
        .ok_or_else(|| anyhow!("glob pattern is not valid UTF-8: {}", pattern.display()))?;
    let mut paths = Vec::new();
    for entry in glob::glob(pattern).with_context(|| format!("bad glob pattern {pattern}"))? {
        paths.push(entry.context("read glob entry")?);
    }
    Ok(paths)
}
