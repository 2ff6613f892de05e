//! Logging infrastructure for dupelist.
//!
//! Structured logging via the `log` facade and `env_logger` backend.
//! `RUST_LOG` takes precedence when set; otherwise the level defaults to
//! info. The CLI surface has no verbosity flags (it is a fixed set of
//! `key=value` tokens), so the environment variable is the only knob.
//!
//! # Example
//!
//! ```rust,no_run
//! use dupelist::logging::init_logging;
//!
//! init_logging();
//! log::info!("scan starting");
//! ```

use std::env;
use std::io::Write;

use env_logger::Builder;
use log::LevelFilter;

/// Initialize the logging subsystem.
///
/// Call once at startup, before any logging calls.
///
/// # Panics
///
/// Panics if called more than once, as `env_logger` can only be
/// initialized once per process.
pub fn init_logging() {
    let mut builder = Builder::new();

    if env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(LevelFilter::Info);
    }

    builder.format(|buf, record| {
        let level = record.level();
        let level_style = buf.default_level_style(level);
        writeln!(
            buf,
            "{level_style}{:<5}{level_style:#} {}",
            level,
            record.args()
        )
    });

    builder.init();
}

/// Get the current log level as a string.
///
/// Useful for confirming the logging configuration at debug level.
#[must_use]
pub fn current_level_name() -> &'static str {
    match log::max_level() {
        LevelFilter::Off => "off",
        LevelFilter::Error => "error",
        LevelFilter::Warn => "warn",
        LevelFilter::Info => "info",
        LevelFilter::Debug => "debug",
        LevelFilter::Trace => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_level_name_values() {
        // The actual level depends on whether init_logging was called
        let name = current_level_name();
        assert!(
            ["off", "error", "warn", "info", "debug", "trace"].contains(&name),
            "Unexpected level name: {}",
            name
        );
    }
}
