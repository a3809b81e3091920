//! Internal unit tests, grouped by module.

mod cli;
mod engine;
mod error;
mod io;
