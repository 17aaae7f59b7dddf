// Copyright 2025-2026 Neil Henderson
//
//! The svecc library.

#![doc(html_no_source)]

pub mod compiler_driver;
pub mod core;
