// Copyright 2025-2026 Neil Henderson

//! Integration test harness for the svecc compiler driver.

mod classification;
mod pipeline;
