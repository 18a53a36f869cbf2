#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the geomech-guard binary.
#[macro_export]
macro_rules! geomech_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("geomech-guard"))
    };
}

/// A 10 ft HQ run that passes every rule with VLs 0.5, 1 and 2.
pub const CONSISTENT_RECORD: &str = r#"{"intervalFrom": 0, "intervalTo": 10, "recoveryLen": 10,
    "wholePieceCount": 3, "wholeCoreLen": 8, "longestPieceLen": 3, "rqdLen": 7,
    "varLen1": 5, "varLen2": 5, "varLen3": 7, "brokenZoneLen": 1, "rubbleZoneLen": 1,
    "coreSize": "HQ"}"#;

/// "From" after "To": fails the structural rule.
pub const REVERSED_RECORD: &str = r#"{"intervalFrom": 12, "intervalTo": 10, "recoveryLen": 1}"#;

/// An exported hole pack holding `records`.
pub fn pack_json(hole: &str, records: &[&str]) -> String {
    format!(
        r#"{{
    "name": "{hole}",
    "mineArea": "North Pit",
    "project": {{"minePropertyName": "Red Lake", "varLen1": 0.5, "varLen2": 1, "varLen3": 2}},
    "geomechData": [{}]
}}"#,
        records.join(",")
    )
}

pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Writes a file and returns its path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn create_pack(&self, relative_path: &str, hole: &str, records: &[&str]) -> PathBuf {
        self.create_file(relative_path, &pack_json(hole, records))
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.join(relative_path)).expect("Failed to read file")
    }
}
