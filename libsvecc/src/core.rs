// Copyright 2025-2026 Neil Henderson
//
//! The `core` module provides foundational types used by the compiler driver.

mod input_file;

pub use input_file::InputFile;
