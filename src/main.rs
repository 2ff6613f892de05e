//! dupelist - Duplicate File Report Generator
//!
//! Entry point for the dupelist CLI application.

use dupelist::{cli, error::ExitCode, logging};

fn main() {
    logging::init_logging();

    // key=value tokens; anything else is ignored by the parser
    let args = cli::parse_args(std::env::args().skip(1));

    match dupelist::run_app(args) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            let exit_code = ExitCode::GeneralError;
            eprintln!("[{}] Error: {:?}", exit_code.code_prefix(), err);
            std::process::exit(exit_code.as_i32());
        }
    }
}
