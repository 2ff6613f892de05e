//! Command-line interface for dupelist.
//!
//! The surface is a set of order-independent `key=value` tokens rather
//! than flags: tokens without `=` and unrecognized keys are silently
//! ignored, which rules out a flag parser and keeps scripting callers
//! forgiving.
//!
//! # Example
//!
//! ```bash
//! # Scan ~/docs for txt and log files, write reports to /tmp/reports
//! dupelist dir=/home/user/docs types=txt,log savepath=/tmp/reports
//!
//! # Scan the working directory for everything
//! dupelist types=all
//! ```

use std::path::PathBuf;

/// Parsed command-line arguments.
///
/// `None` means the key never appeared (or appeared with an empty value);
/// defaults are resolved later, in [`crate::run_app`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Root directory to scan (`dir=`); defaults to the working directory
    pub dir: Option<PathBuf>,
    /// Accepted extensions (`types=`, comma-separated, repeatable);
    /// the special value `all` disables filtering
    pub types: Vec<String>,
    /// Directory for the output artifacts (`savepath=`); defaults to the
    /// working directory
    pub savepath: Option<PathBuf>,
}

/// Parse `key=value` tokens into [`CliArgs`].
///
/// Token order does not matter. Repeated `types=` tokens accumulate;
/// for `dir=` and `savepath=` the last occurrence wins. Empty values are
/// treated as if the key were absent.
pub fn parse_args<I>(tokens: I) -> CliArgs
where
    I: IntoIterator<Item = String>,
{
    let mut args = CliArgs::default();

    for token in tokens {
        let Some((key, value)) = token.split_once('=') else {
            log::debug!("Ignoring token without '=': {token}");
            continue;
        };
        if value.is_empty() {
            log::debug!("Ignoring empty value for key: {key}");
            continue;
        }

        match key {
            "dir" => args.dir = Some(PathBuf::from(value)),
            "types" => args.types.extend(value.split(',').map(str::to_string)),
            "savepath" => args.savepath = Some(PathBuf::from(value)),
            _ => log::debug!("Ignoring unrecognized key: {key}"),
        }
    }

    args
}
