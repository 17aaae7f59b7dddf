// Copyright 2025-2026 Neil Henderson

//! Integration tests for pipeline planning and the dry-run driver path.
//!
//! These tests never require the external toolchain to be installed: they either inspect the planned
//! commands or run the driver under `-###`, which prints commands without spawning anything.

use libsvecc::compiler_driver::{args, plan, Driver};

fn tokens(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}

#[test]
fn full_pipeline_plans_every_stage_with_applicable_inputs() {
    let invocation = args::classify(tokens(&["main.c", "extra.s", "prebuilt.o"])).unwrap();
    let commands = plan(&invocation);

    let stages: Vec<_> = commands.iter().map(|command| command.stage).collect();
    assert_eq!(stages, vec!["clang", "opt", "llc", "as", "ld"]);
}

#[test]
fn link_only_invocation_plans_exactly_one_command() {
    let invocation = args::classify(tokens(&["x.o", "y.o", "-o", "prog"])).unwrap();
    let commands = plan(&invocation);

    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].stage, "ld");

    let argv = &commands[0].argv;
    let x = argv.iter().position(|a| a == "x.o").unwrap();
    let y = argv.iter().position(|a| a == "y.o").unwrap();
    let out = argv.iter().position(|a| a == "prog").unwrap();

    assert!(x < y);
    assert_eq!(argv[out - 1], "-o");
}

#[test]
fn print_commands_only_runs_without_the_toolchain() {
    let invocation = args::classify(tokens(&["-###", "ghost.c", "-o", "ghost"])).unwrap();

    // Nothing is spawned and nothing is written, so this succeeds even though neither the toolchain
    // nor ghost.c exists.
    Driver::new(invocation).run().unwrap();
    assert!(!std::path::Path::new("ghost.ll").exists());
}

#[test]
fn preprocess_mode_plans_no_compilation_commands() {
    let invocation = args::classify(tokens(&["-E", "main.c"])).unwrap();
    assert!(plan(&invocation).is_empty());
}
