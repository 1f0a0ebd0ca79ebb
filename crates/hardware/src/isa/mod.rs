//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the encodings, decoder and disassembler for the modelled MIPS
//! integer subset: shifts, add/subtract, set-less-than, multiply/divide with
//! `hi`/`lo`, immediate arithmetic, word loads and stores, branches, jumps and
//! the simulator's `trap` system service.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding into the [`instruction::Instruction`] sum type.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction and decoded instruction types.
pub mod instruction;

/// Opcode and function code constants.
pub mod mips;
