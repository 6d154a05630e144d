//! Unified exit codes for the ngbench CLI.
//! These codes are part of the public contract and stay stable across releases.

pub const SUCCESS: i32 = 0;
pub const BENCH_FAILED: i32 = 1; // Strict mode: at least one generation failed
pub const INTERNAL_ERROR: i32 = 2; // Load/setup failed or results could not be written
