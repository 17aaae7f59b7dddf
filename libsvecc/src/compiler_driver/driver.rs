// Copyright 2025-2026 Neil Henderson
//
//! The `driver` module defines `Driver`, which is the svecc compiler driver type.

use std::process::Command;

use log::{debug, info};

use super::invocation::Invocation;
use super::stages::{self, StageCommand};
use super::DriverError;

/// The svecc compiler driver.
///
/// The driver consumes a classified [Invocation], plans one external command per applicable input
/// file per stage (and one linker command overall), and runs the commands strictly in sequence. Every
/// child process is waited on before the next one is spawned; the first nonzero exit status aborts
/// the remaining stages with no cleanup of intermediate files.
///
/// # Examples
///
/// ```no_run
/// # use libsvecc::compiler_driver::{args, Driver};
/// let invocation = args::classify(vec!["-c".to_string(), "kernel.c".to_string()])?;
/// Driver::new(invocation).run()?;
/// # Ok::<(), libsvecc::compiler_driver::DriverError>(())
/// ```
pub struct Driver {
    invocation: Invocation,
}

impl Driver {
    /// Creates a new compiler driver for the given invocation.
    pub fn new(invocation: Invocation) -> Self {
        Self { invocation }
    }

    /// Runs the pipeline, or under `-###` prints the commands that would run and spawns nothing.
    pub fn run(&self) -> Result<(), DriverError> {
        debug!("invocation: {:#?}", self.invocation);

        let commands = stages::plan(&self.invocation);

        if self.invocation.print_commands_only {
            for command in &commands {
                println!("{}", command.command_line());
            }
            return Ok(());
        }

        for command in &commands {
            run_stage(command)?;
        }

        Ok(())
    }
}

/// Spawns one stage command and waits for it to finish.
fn run_stage(command: &StageCommand) -> Result<(), DriverError> {
    info!("{}", command.command_line());

    let status = Command::new(&command.argv[0])
        .args(&command.argv[1..])
        .status()
        .map_err(|source| DriverError::StageSpawnFailed { tool: command.argv[0].clone(), source })?;

    if !status.success() {
        // A process killed by a signal has no exit code.
        return Err(DriverError::StageFailed { stage: command.stage, code: status.code().unwrap_or(-1) });
    }

    Ok(())
}
