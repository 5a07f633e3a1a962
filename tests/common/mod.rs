//! Shared fixtures for the pipeline integration tests.
//!
//! Each test binary compiles its own copy, so not every helper is used by
//! every test crate.
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

/// A sandbox for one pipeline run: the binaries run with this directory as
/// their working directory, so extraction and CSV discovery stay isolated.
pub struct PipelineSandbox {
    pub work_dir: TempDir,
    pub goldstandard_dir: TempDir,
    pub output_path: PathBuf,
}

impl Default for PipelineSandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineSandbox {
    pub fn new() -> Self {
        let work_dir = tempfile::tempdir().expect("create work dir");
        let goldstandard_dir = tempfile::tempdir().expect("create gold dir");
        fs::write(goldstandard_dir.path().join("goldstandard.csv"), "id,value\n1,2\n")
            .expect("write gold file");
        let output_path = work_dir.path().join("results.json");
        Self {
            work_dir,
            goldstandard_dir,
            output_path,
        }
    }

    pub fn run_validate(&self, predictions: &Path) -> Output {
        let bin = env!("CARGO_BIN_EXE_validate-submission");
        Command::new(bin)
            .current_dir(self.work_dir.path())
            .arg("--predictions_file")
            .arg(predictions)
            .arg("--goldstandard_folder")
            .arg(self.goldstandard_dir.path())
            .arg("--output")
            .arg(&self.output_path)
            .output()
            .expect("run validate-submission")
    }

    pub fn run_score(&self, predictions: &Path) -> Output {
        let bin = env!("CARGO_BIN_EXE_score-submission");
        Command::new(bin)
            .current_dir(self.work_dir.path())
            .arg("-p")
            .arg(predictions)
            .arg("-g")
            .arg(self.goldstandard_dir.path())
            .arg("-o")
            .arg(&self.output_path)
            .output()
            .expect("run score-submission")
    }

    pub fn read_record(&self) -> serde_json::Value {
        let content = fs::read_to_string(&self.output_path).expect("read results.json");
        serde_json::from_str(&content).expect("parse results.json")
    }
}

pub fn write_zip(path: &Path, entries: &[(&str, &str)]) {
    let file = fs::File::create(path).expect("create zip");
    let mut writer = zip::ZipWriter::new(file);
    for (name, contents) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("start zip entry");
        writer
            .write_all(contents.as_bytes())
            .expect("write zip entry");
    }
    writer.finish().expect("finish zip");
}

pub fn stdout_line(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
