//! Directory walker implementation using walkdir.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing a directory
//! tree depth-first and collecting a [`FileInstance`] for every non-hidden
//! file whose extension passes the [`TypeFilter`].
//!
//! The walk is single-threaded and synchronous. Entries come back in the
//! order the OS returns them per directory; that order is not sorted and
//! not part of the contract. The first listing, stat, or hashing error
//! aborts the whole walk.
//!
//! # Example
//!
//! ```no_run
//! use dupelist::scanner::{TypeFilter, Walker};
//! use std::path::Path;
//!
//! let filter = TypeFilter::from_types(vec!["txt".to_string()]);
//! let walker = Walker::new(Path::new("/home/user/docs"), filter);
//! let outcome = walker.walk().unwrap();
//! println!("{} files, {} types", outcome.files.len(), outcome.types_found.len());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use walkdir::{DirEntry, WalkDir};

use super::{hash_file, FileInstance, ScanError, ScanOutcome, TypeFilter};

/// Directory walker for file discovery and hashing.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Extension filter
    filter: TypeFilter,
}

impl Walker {
    /// Create a new walker for the given root and filter.
    #[must_use]
    pub fn new(root: &Path, filter: TypeFilter) -> Self {
        Self {
            root: root.to_path_buf(),
            filter,
        }
    }

    /// Walk the tree, returning all accepted files and the extensions seen.
    ///
    /// Hidden files and hidden directories (names starting with `.`) are
    /// pruned wholesale, regardless of the filter. Symlinks get no special
    /// treatment: stat follows them, same as the underlying platform call.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] on the first listing, stat, or hashing
    /// failure. There are no partial results: an error discards everything
    /// collected so far.
    pub fn walk(&self) -> Result<ScanOutcome, ScanError> {
        let root_meta = fs::metadata(&self.root).map_err(|e| ScanError::Stat {
            path: self.root.clone(),
            source: e,
        })?;
        if !root_meta.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }

        let mut outcome = ScanOutcome::default();

        // The root is exempt from the hidden check; the rule applies to
        // entries inside the tree, not to the directory being scanned.
        let entries = WalkDir::new(&self.root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

        for entry in entries {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map_or_else(|| self.root.clone(), Path::to_path_buf);
                ScanError::Walk { path, source: e }
            })?;

            if entry.file_type().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            let extension = extension_of(&name).to_string();
            if !self.filter.accepts(&extension) {
                log::trace!("Skipping {} (type {})", entry.path().display(), extension);
                continue;
            }

            if !outcome.types_found.contains(&extension) {
                outcome.types_found.push(extension.clone());
            }

            let metadata = fs::metadata(entry.path()).map_err(|e| ScanError::Stat {
                path: entry.path().to_path_buf(),
                source: e,
            })?;
            let modified = metadata.modified().map_err(|e| ScanError::Stat {
                path: entry.path().to_path_buf(),
                source: e,
            })?;

            let hash = hash_file(entry.path())?;

            outcome.files.push(FileInstance {
                file_type: extension,
                size: metadata.len(),
                modified: DateTime::<Utc>::from(modified).timestamp(),
                hash,
                path: entry.into_path(),
            });
        }

        Ok(outcome)
    }
}

/// Derive the extension from a file name.
///
/// The extension is the substring after the last `.`; a name with no `.`
/// counts as its own extension, and a trailing `.` yields the empty string.
#[must_use]
pub fn extension_of(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(_, ext)| ext)
}

/// Check whether a directory entry is hidden (name starts with `.`).
fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
