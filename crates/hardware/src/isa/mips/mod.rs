//! MIPS Integer Subset.
//!
//! Encodings for the instructions the simulator models.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (bits 31-26).
//! - `funct`: Function codes for register-register operations (bits 5-0).

/// Function code definitions for `OP_SPECIAL` instructions.
pub mod funct;

/// Major opcode definitions.
pub mod opcodes;
