//! Shared helpers for the test suite.

/// Instruction encoders.
pub mod asm;
