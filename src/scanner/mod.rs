//! Scanner module for directory traversal and file hashing.
//!
//! This module provides functionality for:
//! - Depth-first directory walking using walkdir
//! - Extension-based file filtering
//! - Content hashing with BLAKE3
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory traversal and file discovery
//! - [`hasher`]: BLAKE3 file hashing (streaming)
//!
//! # Example
//!
//! ```no_run
//! use dupelist::scanner::{TypeFilter, Walker};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("."), TypeFilter::All);
//! let outcome = walker.walk().unwrap();
//! for file in &outcome.files {
//!     println!("{}: {} bytes", file.path.display(), file.size);
//! }
//! ```

pub mod hasher;
pub mod walker;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// Re-export main types
pub use hasher::hash_file;
pub use walker::{extension_of, Walker};

/// Metadata for one accepted file occurrence.
///
/// Holds everything the report needs: extension, path, size, modification
/// time, and the content hash. Immutable once constructed by the walker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInstance {
    /// File extension (the substring after the last `.` in the name)
    #[serde(rename = "type")]
    pub file_type: String,
    /// Path to the file, rooted at the scanned directory
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// Last modification time, seconds since the Unix epoch
    pub modified: i64,
    /// BLAKE3 content hash as lowercase hex (64 characters)
    pub hash: String,
}

/// Everything a completed walk produces.
///
/// `types_found` replaces the process-wide accumulator the original design
/// called for: it is built during the walk and returned with the files.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Accepted files in traversal order (depth-first, OS listing order)
    pub files: Vec<FileInstance>,
    /// Distinct extensions among accepted files, in first-seen order
    pub types_found: Vec<String>,
}

/// Extension filter applied during the walk.
///
/// The literal token `all` anywhere in the types list disables filtering.
/// An empty extension list accepts nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeFilter {
    /// Accept every extension
    All,
    /// Accept only the listed extensions
    Extensions(Vec<String>),
}

impl TypeFilter {
    /// Build a filter from the raw types list given on the command line.
    #[must_use]
    pub fn from_types(types: Vec<String>) -> Self {
        if types.iter().any(|t| t == "all") {
            TypeFilter::All
        } else {
            TypeFilter::Extensions(types)
        }
    }

    /// Check whether an extension passes the filter.
    #[must_use]
    pub fn accepts(&self, extension: &str) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Extensions(list) => list.iter().any(|t| t == extension),
        }
    }
}

/// Errors that can occur during directory scanning.
///
/// Every variant is fatal: the walk aborts on the first error and the
/// process exits without partial results.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// The scan root is missing or not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A directory listing failed during the walk.
    #[error("Failed to read directory entry under {path}: {source}")]
    Walk {
        /// Path where the error occurred (the walk root if unknown)
        path: PathBuf,
        /// The underlying walkdir error
        #[source]
        source: walkdir::Error,
    },

    /// File metadata could not be read.
    #[error("Failed to stat {path}: {source}")]
    Stat {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A file could not be hashed.
    #[error(transparent)]
    Hash(#[from] HashError),
}

/// Errors that can occur during file hashing.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The specified file was not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_filter_all_keyword() {
        let filter = TypeFilter::from_types(vec!["txt".to_string(), "all".to_string()]);
        assert_eq!(filter, TypeFilter::All);
        assert!(filter.accepts("txt"));
        assert!(filter.accepts("anything"));
    }

    #[test]
    fn test_type_filter_extensions() {
        let filter = TypeFilter::from_types(vec!["txt".to_string(), "log".to_string()]);
        assert!(filter.accepts("txt"));
        assert!(filter.accepts("log"));
        assert!(!filter.accepts("jpg"));
        assert!(!filter.accepts("all"));
    }

    #[test]
    fn test_type_filter_empty_accepts_nothing() {
        let filter = TypeFilter::from_types(Vec::new());
        assert!(!filter.accepts("txt"));
        assert!(!filter.accepts(""));
    }

    #[test]
    fn test_file_instance_serde_field_names() {
        let instance = FileInstance {
            file_type: "txt".to_string(),
            path: PathBuf::from("/tmp/a.txt"),
            size: 3,
            modified: 1_700_000_000,
            hash: "ab".repeat(32),
        };

        let json = serde_json::to_value(&instance).unwrap();
        assert_eq!(json["type"], "txt");
        assert_eq!(json["size"], 3);
        assert_eq!(json["modified"], 1_700_000_000_i64);
        assert!(json.get("file_type").is_none());

        let back: FileInstance = serde_json::from_value(json).unwrap();
        assert_eq!(back, instance);
    }

    #[test]
    fn test_scan_error_display() {
        let err = ScanError::NotADirectory(PathBuf::from("/file.txt"));
        assert_eq!(err.to_string(), "Not a directory: /file.txt");
    }

    #[test]
    fn test_hash_error_display() {
        let err = HashError::NotFound(PathBuf::from("/test"));
        assert_eq!(err.to_string(), "File not found: /test");

        let err = HashError::PermissionDenied(PathBuf::from("/secret"));
        assert_eq!(err.to_string(), "Permission denied: /secret");
    }
}
