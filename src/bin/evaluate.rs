//! Equilibrium Evaluation Binary
//!
//! Validates, solves and judges category files or single game definitions.
//!
//! Subcommands: validate, solve, feedback, collect, run, inspect

use bimatrix::*;

fn main() {
    log();
    if let Err(e) = cli::CLI::run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
