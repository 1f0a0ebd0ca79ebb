//! Simulator error definitions.
//!
//! This module defines every failure the simulator can surface. It provides:
//! 1. **Decode Failures:** Unsupported opcodes and function codes.
//! 2. **System Requests:** Trap services the simulator does not implement.
//! 3. **Memory Faults:** Misaligned, out-of-range, and read-only accesses.
//! 4. **Host Failures:** Console I/O and program image loading.

use std::fmt;

use thiserror::Error;

/// Which field of an instruction had no defined behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnsupportedKind {
    /// Top-level opcode (bits 31-26) is not part of the modelled subset.
    Opcode(u32),
    /// Function code (bits 5-0) under the special opcode is not modelled.
    Function(u32),
}

impl fmt::Display for UnsupportedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opcode(op) => write!(f, "opcode {op:#04x}"),
            Self::Function(funct) => write!(f, "function {funct:#04x}"),
        }
    }
}

/// Reason a memory access was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaultKind {
    /// Address is not a multiple of four.
    Misaligned,
    /// Address lies outside every mapped region.
    OutOfRange,
    /// Store into the instruction memory.
    ReadOnly,
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Misaligned => write!(f, "misaligned access"),
            Self::OutOfRange => write!(f, "out-of-range access"),
            Self::ReadOnly => write!(f, "write to read-only memory"),
        }
    }
}

/// Errors raised while loading or running a program.
///
/// `UnsupportedOperation` may be downgraded to a warning by the decode policy
/// in [`crate::config::PolicyConfig`]; every other variant halts the run.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// Decode found an opcode/function combination with no defined behaviour.
    #[error("unimplemented instruction {raw:#010x} ({kind}) at pc = {pc:#x}")]
    UnsupportedOperation {
        /// Address of the offending instruction.
        pc: u32,
        /// Raw instruction word.
        raw: u32,
        /// Field that could not be decoded.
        kind: UnsupportedKind,
    },

    /// A `trap` instruction requested a service the simulator does not provide.
    #[error("unimplemented trap {code:#x} at pc = {pc:#x}")]
    UnsupportedSystemRequest {
        /// Address of the trap instruction.
        pc: u32,
        /// Requested service code.
        code: u32,
    },

    /// A fetch, load or store violated alignment, range or permissions.
    #[error("memory fault: {kind} at address {addr:#010x}")]
    MemoryFault {
        /// Byte address of the access.
        addr: u32,
        /// Why the access failed.
        kind: FaultKind,
    },

    /// Console I/O for a trap service failed.
    #[error("console error: {0}")]
    Console(String),

    /// A program or data image could not be read or parsed.
    #[error("could not load '{path}': {reason}")]
    Load {
        /// Path of the image.
        path: String,
        /// Human-readable reason.
        reason: String,
    },

    /// The configuration describes an impossible machine.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SimError {
    /// Shorthand for a memory fault.
    #[inline]
    pub const fn fault(addr: u32, kind: FaultKind) -> Self {
        Self::MemoryFault { addr, kind }
    }
}
