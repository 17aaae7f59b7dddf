// Copyright 2025-2026 Neil Henderson

//! Integration tests for the argument classifier through the public library API.

use libsvecc::compiler_driver::{args, DriverError, Mode};

fn tokens(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}

#[test]
fn default_invocation_links_an_executable_named_a_out() {
    let invocation = args::classify(tokens(&["main.c", "util.c"])).unwrap();

    assert_eq!(invocation.mode, Mode::Link);
    assert_eq!(invocation.output_file, "a.out");
    assert_eq!(invocation.frontend_files.len(), 2);
    assert_eq!(invocation.linker_args, tokens(&["main.o", "util.o"]));
}

#[test]
fn conflicting_mode_flags_fail_classification() {
    let result = args::classify(tokens(&["-E", "-c", "main.c"]));
    assert!(matches!(result, Err(DriverError::ConflictingModes(_))));
}

#[test]
fn conflicting_output_flags_fail_classification() {
    let result = args::classify(tokens(&["main.c", "-o", "a", "-o", "b"]));
    assert!(matches!(result, Err(DriverError::ConflictingOutputs(_))));
}

#[test]
fn unknown_file_suffix_fails_regardless_of_other_arguments() {
    let result = args::classify(tokens(&["-c", "-g", "-lm", "main.c", "weird.xyz"]));
    assert!(matches!(result, Err(DriverError::UnknownExtension { .. })));
}

#[test]
fn every_classification_error_mentions_the_offender() {
    let err = args::classify(tokens(&["-o"])).unwrap_err();
    assert!(err.to_string().contains("-o"));

    let err = args::classify(tokens(&["noext"])).unwrap_err();
    assert!(err.to_string().contains("noext"));

    let err = args::classify(tokens(&["weird.xyz"])).unwrap_err();
    assert!(err.to_string().contains(".xyz"));
}
