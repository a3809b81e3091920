//! Configuration for the demonstration routines.
//!
//! This module provides:
//! - `ExerciseConfig`: Paths, jitter and fault settings for the routines
//! - `ConfigFormat`: Config file format inferred from the file extension

mod exercise;
mod format;

pub use exercise::{CONFIG_ENV, ExerciseConfig};
pub use format::ConfigFormat;
