//! Engine module tests.
