//! MIPS architectural state.

/// General-Purpose Register file implementation.
pub mod gpr;
