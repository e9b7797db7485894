//! Test builders — a scratch workspace holding an input records file and an
//! output path, plus a ready-to-run [`Config`].

use callmap_core::config::Config;
use callmap_core::{MalformedPolicy, OverlapPolicy};
use std::path::{Path, PathBuf};

/// Temporary directory with `res.deps` in and `callfile.csv` out.
///
/// # Example
///
/// ```rust
/// let ws = Workspace::new().with_records(CORPUS_WELL_FORMED);
/// let summary = callmap::run(&ws.config()).unwrap();
/// assert_eq!(ws.output(), EXPECTED_WELL_FORMED);
/// ```
pub struct Workspace {
    dir: tempfile::TempDir,
    overlap: OverlapPolicy,
    on_malformed: MalformedPolicy,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
            overlap: OverlapPolicy::Both,
            on_malformed: MalformedPolicy::Skip,
        }
    }

    pub fn with_records(self, lines: &[&str]) -> Self {
        self.with_raw_input(&super::deps_file(lines))
    }

    pub fn with_raw_input(self, contents: &str) -> Self {
        std::fs::write(self.input_path(), contents).expect("write input");
        self
    }

    pub fn overlap(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn strict(mut self) -> Self {
        self.on_malformed = MalformedPolicy::Abort;
        self
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn input_path(&self) -> PathBuf {
        self.dir.path().join("res.deps")
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join("callfile.csv")
    }

    pub fn config(&self) -> Config {
        let mut cfg = Config::defaults();
        cfg.input.path = self.input_path();
        cfg.output.path = self.output_path();
        cfg.convert.overlap = self.overlap;
        cfg.convert.on_malformed = self.on_malformed;
        cfg
    }

    /// Contents of the output table. Panics if it was never written.
    pub fn output(&self) -> String {
        std::fs::read_to_string(self.output_path()).expect("read output")
    }

    pub fn output_bytes(&self) -> Vec<u8> {
        std::fs::read(self.output_path()).expect("read output")
    }
}
