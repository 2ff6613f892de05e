//! Output artifacts for a completed scan.
//!
//! Every successful run writes three files to the save directory:
//! the raw hash-to-bucket map as pretty JSON, an escaped-string text
//! rendering of the same map, and the [`report::FileCollection`] report.

pub mod report;

pub use report::{FileCollection, ReportError, ReportPaths, ReportWriter};
