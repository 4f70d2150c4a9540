//! recovery-triage - Ownership triage for package index account recovery
//!
//! Reads a support issue, checks which of the claimed account's packages
//! have sources controlled by the reporter, and comments the result back.

#![deny(unsafe_code, trivial_casts, trivial_numeric_casts, unused_import_braces)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, missing_debug_implementations)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

mod cli;
mod commands;

use std::process::ExitCode;

/// Main entry point for the recovery-triage CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}
