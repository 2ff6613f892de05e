//! Hash-based duplicate grouping.
//!
//! # Overview
//!
//! The aggregation half of the pipeline: the walker hands over a flat list
//! of [`FileInstance`] records, and [`group_by_hash`] buckets them by
//! content hash. Two files with identical bytes always land in the same
//! bucket; a bucket of size one is simply a unique file.
//!
//! Bucket membership keeps the walker's arrival order. Iteration order
//! over the map itself is whatever `HashMap` gives us; the report format
//! makes no promise about it.
//!
//! # Example
//!
//! ```
//! use dupelist::duplicates::group_by_hash;
//! use dupelist::scanner::FileInstance;
//! use std::path::PathBuf;
//!
//! let instance = |name: &str, hash: &str| FileInstance {
//!     file_type: "txt".to_string(),
//!     path: PathBuf::from(name),
//!     size: 1,
//!     modified: 0,
//!     hash: hash.to_string(),
//! };
//!
//! let map = group_by_hash(vec![
//!     instance("/a.txt", "aa"),
//!     instance("/b.txt", "aa"),
//!     instance("/c.txt", "bb"),
//! ]);
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map["aa"].instances.len(), 2);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::scanner::FileInstance;

/// Mapping from content hash to its bucket of file instances.
pub type FileMap = HashMap<String, FileInfo>;

/// A bucket of files sharing one content hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// The shared content hash
    pub hash: String,
    /// Every file instance with this hash, in traversal order
    pub instances: Vec<FileInstance>,
}

impl FileInfo {
    /// Create an empty bucket for a hash.
    #[must_use]
    pub fn new(hash: String) -> Self {
        Self {
            hash,
            instances: Vec::new(),
        }
    }

    /// Number of instances in this bucket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Check if this bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Check if this bucket holds actual duplicates (2+ instances).
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.instances.len() > 1
    }
}

/// Group file instances by content hash.
///
/// The first instance seen for a hash creates the bucket; later instances
/// append in arrival order.
#[must_use]
pub fn group_by_hash(instances: Vec<FileInstance>) -> FileMap {
    let mut map = FileMap::new();
    for instance in instances {
        map.entry(instance.hash.clone())
            .or_insert_with(|| FileInfo::new(instance.hash.clone()))
            .instances
            .push(instance);
    }
    map
}
