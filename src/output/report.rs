//! JSON report writer for scan results.
//!
//! # Output Artifacts
//!
//! For a run at Unix timestamp `<ts>`, three files land in the save
//! directory:
//!
//! 1. `filelist-<ts>.json` — pretty-printed JSON object mapping hash to
//!    bucket (the raw [`FileMap`]).
//! 2. `filelist-<ts>.json.txt` — the compact JSON of the same map with
//!    every `"` escaped as `\"`.
//! 3. `filelist-<ts>.json.list.json` — pretty-printed JSON of the
//!    [`FileCollection`] report (metadata plus the flat bucket list).
//!
//! # Report Schema
//!
//! ```json
//! {
//!   "date-made": 1700000000,
//!   "dir-path": "/scanned/root",
//!   "file-types": ["txt", "log"],
//!   "files": [
//!     {
//!       "hash": "abc123...",
//!       "instances": [
//!         { "type": "txt", "path": "/scanned/root/a.txt",
//!           "size": 1, "modified": 1700000000, "hash": "abc123..." }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::duplicates::{FileInfo, FileMap};

/// Top-level report structure: run metadata plus the flat bucket list.
///
/// The `files` order follows the map's iteration order, which is
/// unspecified; within a bucket, instance order is traversal order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileCollection {
    /// Report creation time, seconds since the Unix epoch
    #[serde(rename = "date-made")]
    pub date_made: i64,
    /// Root directory that was scanned
    #[serde(rename = "dir-path")]
    pub dir_path: PathBuf,
    /// Distinct extensions among accepted files, in first-seen order
    #[serde(rename = "file-types")]
    pub file_types: Vec<String>,
    /// All buckets, duplicates and unique files alike
    pub files: Vec<FileInfo>,
}

impl FileCollection {
    /// Assemble the report from the bucket map and run metadata.
    #[must_use]
    pub fn new(date_made: i64, dir_path: PathBuf, file_types: Vec<String>, map: &FileMap) -> Self {
        Self {
            date_made,
            dir_path,
            file_types,
            files: map.values().cloned().collect(),
        }
    }

    /// Total number of file instances across all buckets.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.files.iter().map(FileInfo::len).sum()
    }
}

/// Paths of the three artifacts produced by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// The raw bucket map, pretty-printed
    pub map_json: PathBuf,
    /// The escaped-string rendering of the map
    pub escaped_text: PathBuf,
    /// The FileCollection report, pretty-printed
    pub collection_json: PathBuf,
}

/// Writes the report artifacts into a save directory.
#[derive(Debug)]
pub struct ReportWriter {
    /// Directory the artifacts are written into
    save_dir: PathBuf,
}

impl ReportWriter {
    /// Create a writer targeting the given directory.
    #[must_use]
    pub fn new(save_dir: &Path) -> Self {
        Self {
            save_dir: save_dir.to_path_buf(),
        }
    }

    /// Write all three artifacts for this run.
    ///
    /// `timestamp` becomes part of the base file name
    /// (`filelist-<timestamp>.json`).
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if serialization or any file write fails.
    /// A failure partway through leaves the already written artifacts in
    /// place; there is no cleanup.
    pub fn write(
        &self,
        map: &FileMap,
        collection: &FileCollection,
        timestamp: i64,
    ) -> Result<ReportPaths, ReportError> {
        let map_json = self.save_dir.join(format!("filelist-{timestamp}.json"));
        let escaped_text = append_suffix(&map_json, ".txt");
        let collection_json = append_suffix(&map_json, ".list.json");

        let pretty_map = serde_json::to_string_pretty(map)?;
        write_artifact(&map_json, &pretty_map)?;

        // The escaped rendering works off the compact JSON, not the
        // pretty-printed one.
        let escaped = serde_json::to_string(map)?.replace('"', "\\\"");
        write_artifact(&escaped_text, &escaped)?;

        let pretty_collection = serde_json::to_string_pretty(collection)?;
        write_artifact(&collection_json, &pretty_collection)?;

        Ok(ReportPaths {
            map_json,
            escaped_text,
            collection_json,
        })
    }
}

/// Append a suffix to a file name, keeping the existing extension.
fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

fn write_artifact(path: &Path, content: &str) -> Result<(), ReportError> {
    fs::write(path, content).map_err(|e| ReportError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Errors that can occur while writing the report artifacts.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error during writing
    #[error("Failed to write {path}: {source}")]
    Io {
        /// Path of the artifact that failed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
