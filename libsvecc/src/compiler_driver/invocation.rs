// Copyright 2025-2026 Neil Henderson
//
//! The `invocation` module defines the [Invocation] record produced by the argument classifier.

use crate::core::InputFile;

/// The requested driver mode.
///
/// At most one of the mode flags (`-E`, `-S`, `-c`) may appear on the command-line. With none given,
/// the driver runs the full pipeline and links an executable.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// `-E`: stop before compilation. No front-end, optimizer, code generator, or linker commands are
    /// issued; assembler-suffix inputs are still assembled.
    Preprocess,

    /// `-S`: compile to assembly text (`stem.s`) and stop.
    CompileToAsm,

    /// `-c`: compile to object files (`stem.o`) and stop.
    CompileToObject,

    /// Full pipeline: compile, assemble, and link an executable.
    #[default]
    Link,
}

impl Mode {
    /// Does this mode run the front-end and optimizer stages?
    pub fn includes_compilation(self) -> bool {
        matches!(self, Mode::CompileToAsm | Mode::CompileToObject | Mode::Link)
    }

    /// Does this mode run the linker?
    pub fn includes_linking(self) -> bool {
        self == Mode::Link
    }
}

/// The classified command-line: resolved mode, resolved output file, and the per-stage option and
/// input-file buckets. Built once by [args::classify](super::args::classify) and immutable afterwards.
///
/// Bucket order is insertion order from the original argument list. For `linker_args` that order is
/// semantically required: object names and `-l`/`-L` flags must reach the linker in the caller's
/// relative order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The resolved driver mode.
    pub mode: Mode,

    /// The resolved output file for the linker (`a.out` unless `-o` was given).
    pub output_file: String,

    /// `-###`: print every command that would run, without spawning anything.
    pub print_commands_only: bool,

    /// Debug-info flags (`-g*`), shared by the front-end, optimizer, and code generator.
    pub general_options: Vec<String>,

    /// Source files (`.c`) consumed by the front-end.
    pub frontend_files: Vec<InputFile>,

    /// Unrecognized dash-prefixed tokens, passed through to the front-end unvalidated.
    pub frontend_options: Vec<String>,

    /// Intermediate-representation files (`.ll`) entering the pipeline at the optimizer.
    pub ir_files: Vec<InputFile>,

    /// `-mllvm` values, forwarded to the optimizer and code generator.
    pub backend_options: Vec<String>,

    /// Assembly files (`.s`) consumed by the assembler.
    pub asm_files: Vec<InputFile>,

    /// `-Wa,` payload parts, forwarded to the assembler.
    pub assembler_options: Vec<String>,

    /// The linker-argument bucket: eventual object names for compiled inputs, prebuilt
    /// objects/archives/shared libraries verbatim, `-l`/`-L` flags, and `-Wl,` payload parts, all in
    /// original argument order.
    pub linker_args: Vec<String>,
}
