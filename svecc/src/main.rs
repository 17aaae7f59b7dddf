// Copyright 2025-2026 Neil Henderson

//! main entry point for the compiler driver executable.

use std::process::ExitCode;

use libsvecc::compiler_driver::{args, Driver};

fn main() -> ExitCode {
    pretty_env_logger::init();

    // Classify the command-line into the driver's invocation record. Any classification error is
    // fatal and happens before a single subprocess is spawned.
    let invocation = match args::parse_command_line_args() {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("svecc: error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = Driver::new(invocation).run() {
        eprintln!("svecc: error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
