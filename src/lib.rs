//! dupelist - Duplicate File Report Generator
//!
//! A Rust CLI tool that scans a directory tree, filters files by
//! extension, hashes each match with BLAKE3, groups files by identical
//! hash, and writes the grouping as a set of JSON report artifacts.
//!
//! The pipeline is strictly sequential: the [`scanner`] walks the tree
//! and produces file records, [`duplicates`] buckets them by hash, and
//! [`output`] serializes the result. The first error anywhere aborts the
//! run.

pub mod cli;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

use std::env;

use anyhow::Context;
use chrono::Utc;

use crate::cli::CliArgs;
use crate::duplicates::group_by_hash;
use crate::error::ExitCode;
use crate::output::{FileCollection, ReportWriter};
use crate::scanner::{TypeFilter, Walker};

/// Run the full scan-group-report pipeline.
///
/// Resolves defaults for the parsed arguments (working directory for
/// `dir` and `savepath`), walks the tree, groups by hash, and writes the
/// three report artifacts.
///
/// # Errors
///
/// Returns the first scan or output error; nothing written before the
/// failure is cleaned up.
pub fn run_app(args: CliArgs) -> anyhow::Result<ExitCode> {
    log::debug!("Logging level: {}", logging::current_level_name());

    let cwd = env::current_dir().context("Failed to resolve working directory")?;
    let root = args.dir.unwrap_or_else(|| cwd.clone());
    let save_dir = args.savepath.unwrap_or(cwd);
    let filter = TypeFilter::from_types(args.types);

    log::info!(
        "Scanning {} (types: {}), writing reports to {}",
        root.display(),
        describe_filter(&filter),
        save_dir.display()
    );

    let walker = Walker::new(&root, filter);
    let outcome = walker
        .walk()
        .with_context(|| format!("Scan of {} failed", root.display()))?;

    log::info!(
        "Found {} files, types encountered: [{}]",
        outcome.files.len(),
        outcome.types_found.join(", ")
    );

    let types_found = outcome.types_found.clone();
    let map = group_by_hash(outcome.files);
    let duplicate_buckets = map.values().filter(|b| b.has_duplicates()).count();
    log::info!(
        "{} distinct hashes, {} with more than one instance",
        map.len(),
        duplicate_buckets
    );

    let timestamp = Utc::now().timestamp();
    let collection = FileCollection::new(timestamp, root, types_found, &map);

    let writer = ReportWriter::new(&save_dir);
    let paths = writer
        .write(&map, &collection, timestamp)
        .context("Failed to write report artifacts")?;

    log::info!(
        "Wrote {}, {}, {}",
        paths.map_json.display(),
        paths.escaped_text.display(),
        paths.collection_json.display()
    );

    Ok(ExitCode::Success)
}

/// Human-readable rendering of the active filter for log output.
fn describe_filter(filter: &TypeFilter) -> String {
    match filter {
        TypeFilter::All => "all".to_string(),
        TypeFilter::Extensions(list) => list.join(","),
    }
}
