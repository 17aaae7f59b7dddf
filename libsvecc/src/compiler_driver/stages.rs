// Copyright 2025-2026 Neil Henderson
//
//! The `stages` module holds the fixed command-line templates of the external toolchain stages and
//! builds the ordered list of commands a classified invocation requires.
//!
//! Each template encodes the stage's target architecture, SVE/NEON vector-extension enablement, fixed
//! floating-point math mode, and vectorization-remark reporting. The flag vocabulary of each external
//! tool is a contract: the templates must match what the installed toolchain accepts, including flag
//! order where the tool is order-sensitive.

use super::invocation::{Invocation, Mode};
use crate::core::InputFile;

const FRONTEND_TOOL: &str = "/opt/a64sve/bin/clang";
const OPTIMIZER_TOOL: &str = "/opt/a64sve/bin/opt";
const CODE_GENERATOR_TOOL: &str = "/opt/a64sve/bin/llc";
const ASSEMBLER_TOOL: &str = "/opt/a64sve/bin/as";
const LINKER_TOOL: &str = "/opt/a64sve/bin/ld";

// The front-end only lowers to IR; all optimization happens in the optimizer stage, so it runs at -O0.
static FRONTEND_TEMPLATE: &[&str] = &[
    "-S",
    "-emit-llvm",
    "-O0",
    "--target=aarch64-arm-none-eabi+sve",
    "-ffast-math",
    "-Rpass=loop-vectorize",
    "-Rpass-missed=loop-vectorize",
    "-Rpass-analysis=loop-vectorize",
];

static OPTIMIZER_TEMPLATE: &[&str] = &[
    "-S",
    "-mattr=+sve",
    "-mattr=+neon",
    "-O3",
    "-ffast-math=1",
    "-fp-contract=fast",
    "-enable-unsafe-fp-math",
    "-recip=all",
    "-force-scalable-vectorization",
    "-force-vector-predication",
    "-enable-non-consecutive-stride-ind-vars",
    "-vectorize-loops=1",
    "-vectorize-slp=1",
    "-pass-remarks=loop-vectorize",
    "-pass-remarks-missed=loop-vectorize",
    "-pass-remarks-analysis=loop-vectorize",
];

static CODE_GENERATOR_TEMPLATE: &[&str] = &[
    "-mtriple=aarch64--linux-gnu",
    "-mattr=+sve",
    "-O3",
    "-ffast-math",
    "-fp-contract=fast",
    "-enable-unsafe-fp-math",
];

static ASSEMBLER_TEMPLATE: &[&str] = &["-march=armv8-a+sve"];

static LINKER_PROLOGUE: &[&str] = &[
    "--hash-style=gnu",
    "--no-add-needed",
    "--eh-frame-hdr",
    "-m",
    "aarch64linux",
    "-dynamic-linker",
    "/lib/ld-linux-aarch64.so.1",
];

// System startup objects and the library search-path list of the host GCC installation.
static LINKER_STARTUP: &[&str] = &[
    "/usr/lib/gcc/aarch64-redhat-linux/4.8.5/../../../../lib64/crt1.o",
    "/usr/lib/gcc/aarch64-redhat-linux/4.8.5/../../../../lib64/crti.o",
    "/usr/lib/gcc/aarch64-redhat-linux/4.8.5/crtbegin.o",
    "-L/usr/lib/gcc/aarch64-redhat-linux/4.8.5",
    "-L/usr/lib/gcc/aarch64-redhat-linux/4.8.5/../../../../lib64",
    "-L/lib/../lib64",
    "-L/usr/lib/../lib64",
    "-L/usr/lib/gcc/aarch64-redhat-linux/4.8.5/../../..",
    "-L/opt/a64sve/bin/../lib",
    "-L/lib",
    "-L/usr/lib",
];

// Support object for SVE instructions the execution environment cannot run natively. Linked into
// every executable, after the caller's own objects and libraries.
const VECTOR_RUNTIME_OBJECT: &str = "yasve.o";

static LINKER_EPILOGUE: &[&str] = &[
    "-lgcc",
    "--as-needed",
    "-lgcc_s",
    "--no-as-needed",
    "-lc",
    "-lgcc",
    "--as-needed",
    "-lgcc_s",
    "--no-as-needed",
    "/usr/lib/gcc/aarch64-redhat-linux/4.8.5/crtend.o",
    "/usr/lib/gcc/aarch64-redhat-linux/4.8.5/../../../../lib64/crtn.o",
];

/// One external command: the stage it belongs to (used in failure reports) and the full argument
/// vector, with the tool path in `argv[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageCommand {
    pub stage: &'static str,
    pub argv: Vec<String>,
}

impl StageCommand {
    fn new(stage: &'static str, tool: &str) -> Self {
        Self { stage, argv: vec![tool.to_string()] }
    }

    fn arg(&mut self, arg: impl Into<String>) {
        self.argv.push(arg.into());
    }

    fn args<'a>(&mut self, args: impl IntoIterator<Item = &'a str>) {
        self.argv.extend(args.into_iter().map(str::to_string));
    }

    /// The command as one display line, for logging and `-###` output.
    pub fn command_line(&self) -> String {
        self.argv.join(" ")
    }
}

/// Builds the ordered list of external commands for the given invocation.
///
/// Stage order is fixed: front-end, optimizer, code generator, assembler, linker. The front-end and
/// optimizer apply in every compilation-inclusive mode, the code generator emits objects (or assembly
/// text under `-S`), the assembler applies in every mode, and the linker only in full-pipeline mode.
pub fn plan(invocation: &Invocation) -> Vec<StageCommand> {
    let mut commands = Vec::new();

    if invocation.mode.includes_compilation() {
        for file in &invocation.frontend_files {
            commands.push(frontend_command(file, invocation));
        }

        // The optimizer sees both freshly lowered IR and IR files given on the command-line.
        for file in invocation.frontend_files.iter().chain(&invocation.ir_files) {
            commands.push(optimizer_command(file, invocation));
        }

        let (filetype, out_suffix) = match invocation.mode {
            Mode::CompileToAsm => ("-filetype=asm", ".s"),
            _ => ("-filetype=obj", ".o"),
        };

        for file in invocation.frontend_files.iter().chain(&invocation.ir_files) {
            commands.push(code_generator_command(file, invocation, filetype, out_suffix));
        }
    }

    // Assembly inputs are assembled in every mode.
    for file in &invocation.asm_files {
        commands.push(assembler_command(file, invocation));
    }

    if invocation.mode.includes_linking() {
        commands.push(linker_command(invocation));
    }

    commands
}

/// Front-end: lowers one source file to an IR file (`stem.ll`) in the working directory.
fn frontend_command(file: &InputFile, invocation: &Invocation) -> StageCommand {
    let mut command = StageCommand::new("clang", FRONTEND_TOOL);

    command.args(FRONTEND_TEMPLATE.iter().copied());
    command.args(invocation.general_options.iter().map(String::as_str));
    command.args(invocation.frontend_options.iter().map(String::as_str));

    command.arg(file.path());
    command.arg("-o");
    command.arg(file.working_file(".ll"));

    command
}

/// Optimizer: transforms one IR file into optimized IR (`stem.ll2`) in the working directory.
///
/// An IR file named on the command-line is read from wherever the caller put it; IR lowered from a
/// source file by the front-end is read from the working directory.
fn optimizer_command(file: &InputFile, invocation: &Invocation) -> StageCommand {
    let mut command = StageCommand::new("opt", OPTIMIZER_TOOL);

    command.args(OPTIMIZER_TEMPLATE.iter().copied());
    command.args(invocation.general_options.iter().map(String::as_str));
    command.args(invocation.backend_options.iter().map(String::as_str));

    let input = if file.suffix == ".ll" { file.path() } else { file.working_file(".ll") };
    command.arg(input);
    command.arg("-o");
    command.arg(file.working_file(".ll2"));

    command
}

/// Code generator: lowers one optimized IR file to an object file or assembly text.
fn code_generator_command(
    file: &InputFile,
    invocation: &Invocation,
    filetype: &str,
    out_suffix: &str,
) -> StageCommand {
    let mut command = StageCommand::new("llc", CODE_GENERATOR_TOOL);

    command.args(CODE_GENERATOR_TEMPLATE.iter().copied());
    command.arg(filetype);
    command.args(invocation.general_options.iter().map(String::as_str));
    command.args(invocation.backend_options.iter().map(String::as_str));

    command.arg(file.working_file(".ll2"));
    command.arg("-o");
    command.arg(file.working_file(out_suffix));

    command
}

/// Assembler: turns one assembly file into an object file in the working directory.
fn assembler_command(file: &InputFile, invocation: &Invocation) -> StageCommand {
    let mut command = StageCommand::new("as", ASSEMBLER_TOOL);

    command.args(ASSEMBLER_TEMPLATE.iter().copied());
    command.args(invocation.assembler_options.iter().map(String::as_str));

    command.arg(file.path());
    command.arg("-o");
    command.arg(file.object_file());

    command
}

/// Linker: one command regardless of file count. The caller's objects and `-l`/`-L` flags keep their
/// original relative order, between the system startup objects and the vector runtime object.
fn linker_command(invocation: &Invocation) -> StageCommand {
    let mut command = StageCommand::new("ld", LINKER_TOOL);

    command.args(LINKER_PROLOGUE.iter().copied());
    command.arg("-o");
    command.arg(invocation.output_file.as_str());
    command.args(LINKER_STARTUP.iter().copied());
    command.args(invocation.linker_args.iter().map(String::as_str));
    command.arg(VECTOR_RUNTIME_OBJECT);
    command.args(LINKER_EPILOGUE.iter().copied());

    command
}
