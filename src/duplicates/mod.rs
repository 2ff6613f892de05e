//! Duplicate detection module.
//!
//! Groups scanned files by their content hash: files sharing a hash share
//! a bucket, and a bucket with more than one instance is a duplicate set.

pub mod groups;

pub use groups::{group_by_hash, FileInfo, FileMap};
