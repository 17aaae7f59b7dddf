// Copyright 2025-2026 Neil Henderson
//
//! The `args` module defines the command-line argument classifier.
//! The driver accepts the flag vocabulary of a C compiler: most dash-prefixed tokens are passed
//! through to the front-end unvalidated, and linker arguments must keep their relative order with the
//! object files around them, so classification is a hand-written single scan rather than a
//! declarative parser.

use super::invocation::{Invocation, Mode};
use super::DriverError;
use crate::core::InputFile;

// These options consume the following token as their value, e.g. "-o outputfile".
static OPTIONS_WITH_VALUE: &[&str] = &["-mllvm", "-o"];

const DEFAULT_EXECUTABLE_FILENAME: &str = "a.out";

/// Classifies the process's command-line arguments into an [Invocation].
pub fn parse_command_line_args() -> Result<Invocation, DriverError> {
    classify(std::env::args().skip(1).collect())
}

/// Classifies a raw argument list into an [Invocation]: normalizes multi-token options, partitions
/// every token into its bucket with a single left-to-right scan, and resolves the mode and output
/// file.
pub fn classify(tokens: Vec<String>) -> Result<Invocation, DriverError> {
    let mut classifier = Classifier::default();

    for token in normalize(tokens)? {
        classifier.scan(token)?;
    }

    classifier.resolve()
}

/// Merges each option that takes a value with its following token into one compound token:
/// `["-o", "out"]` becomes `["-o,out"]`.
///
/// The following token is consumed unconditionally, even if it looks like a flag itself. A
/// value-taking option with no token after it is a fatal error.
pub fn normalize(tokens: Vec<String>) -> Result<Vec<String>, DriverError> {
    let mut normalized = Vec::with_capacity(tokens.len());
    let mut tokens = tokens.into_iter();

    while let Some(token) = tokens.next() {
        if OPTIONS_WITH_VALUE.contains(&token.as_str()) {
            match tokens.next() {
                Some(value) => normalized.push(format!("{token},{value}")),
                None => return Err(DriverError::MissingOptionArgument(token)),
            }
        } else {
            normalized.push(token);
        }
    }

    Ok(normalized)
}

/// The classifier's working state: the invocation record under construction, plus the mode and
/// output-file candidates which are validated once the scan is complete.
#[derive(Default)]
struct Classifier {
    mode_flags: Vec<String>,
    output_files: Vec<String>,
    invocation: Invocation,
}

impl Classifier {
    /// Routes one normalized token into its bucket. Rules apply first-match, so e.g. `-lm` lands in
    /// the linker bucket and never reaches the front-end passthrough.
    fn scan(&mut self, token: String) -> Result<(), DriverError> {
        if token == "-E" || token == "-S" || token == "-c" {
            self.mode_flags.push(token);
        } else if let Some(output) = token.strip_prefix("-o,") {
            self.output_files.push(output.to_string());
        } else if token.starts_with("-O") {
            // Optimization levels are fixed by the stage templates; caller-supplied ones are dropped.
        } else if token.starts_with("-g") {
            self.invocation.general_options.push(token);
        } else if token.starts_with("-l") || token.starts_with("-L") {
            self.invocation.linker_args.push(token);
        } else if let Some(payload) = token.strip_prefix("-Wl,") {
            self.invocation.linker_args.extend(split_payload(payload));
        } else if let Some(payload) = token.strip_prefix("-Wa,") {
            self.invocation.assembler_options.extend(split_payload(payload));
        } else if let Some(value) = token.strip_prefix("-mllvm,") {
            self.invocation.backend_options.push(value.to_string());
        } else if token == "-###" {
            self.invocation.print_commands_only = true;
        } else if token.starts_with('-') {
            self.invocation.frontend_options.push(token);
        } else {
            self.scan_file(token)?;
        }

        Ok(())
    }

    /// Routes a file argument by its suffix. Files that enter the pipeline before the linker also
    /// reserve their eventual object name in the linker bucket, so final link order matches the
    /// caller's argument order.
    fn scan_file(&mut self, path: String) -> Result<(), DriverError> {
        let file = InputFile::split(&path);
        let suffix = file.suffix.clone();

        match suffix.as_str() {
            ".c" => {
                self.invocation.linker_args.push(file.object_file());
                self.invocation.frontend_files.push(file);
            }
            ".ll" => {
                self.invocation.linker_args.push(file.object_file());
                self.invocation.ir_files.push(file);
            }
            ".s" => {
                self.invocation.linker_args.push(file.object_file());
                self.invocation.asm_files.push(file);
            }
            ".o" | ".a" | ".so" => self.invocation.linker_args.push(path),
            "" => return Err(DriverError::MissingExtension(path)),
            _ => return Err(DriverError::UnknownExtension { path, suffix }),
        }

        Ok(())
    }

    /// Validates the recorded candidates and produces the final immutable record.
    fn resolve(mut self) -> Result<Invocation, DriverError> {
        if self.mode_flags.len() > 1 {
            return Err(DriverError::ConflictingModes(self.mode_flags.join(" ")));
        }

        self.invocation.mode = match self.mode_flags.first().map(String::as_str) {
            Some("-E") => Mode::Preprocess,
            Some("-S") => Mode::CompileToAsm,
            Some("-c") => Mode::CompileToObject,
            _ => Mode::Link,
        };

        if self.output_files.len() > 1 {
            return Err(DriverError::ConflictingOutputs(self.output_files.join(" ")));
        }

        self.invocation.output_file = match self.output_files.pop() {
            Some(output) => output,
            None => DEFAULT_EXECUTABLE_FILENAME.to_string(),
        };

        Ok(self.invocation)
    }
}

fn split_payload(payload: &str) -> Vec<String> {
    payload.split(',').map(str::to_string).collect()
}
