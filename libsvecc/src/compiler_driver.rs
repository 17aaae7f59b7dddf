// Copyright 2025-2026 Neil Henderson
//
//! The `compiler_driver` module defines the functions and types which orchestrate the external
//! toolchain stages: front-end compiler, optimizer, code generator, assembler, and linker.

pub mod args;
pub mod invocation;

mod driver;
mod stages;


pub use driver::Driver;
pub use invocation::{Invocation, Mode};
pub use stages::{plan, StageCommand};

/// An error returned by the compiler driver.
///
/// Every variant is fatal: classification errors abort the run before any subprocess is spawned, and a
/// stage failure aborts the remaining stages with no cleanup of intermediate files.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("option '{0}' needs an argument")]
    MissingOptionArgument(String),

    #[error("multiple mode options: {0}")]
    ConflictingModes(String),

    #[error("multiple output files: {0}")]
    ConflictingOutputs(String),

    #[error("no file extension in '{0}'")]
    MissingExtension(String),

    #[error("unknown file extension '{suffix}' in '{path}'")]
    UnknownExtension { path: String, suffix: String },

    #[error("failed to run {tool}: {source}")]
    StageSpawnFailed { tool: String, source: std::io::Error },

    #[error("{stage} exited with status {code}")]
    StageFailed { stage: &'static str, code: i32 },
}
