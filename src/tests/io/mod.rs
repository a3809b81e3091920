//! I/O module tests.

mod jitter_tests;
mod memory_tests;
