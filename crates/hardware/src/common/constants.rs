//! Global System Constants.
//!
//! This module defines machine-wide constants shared by the loader, the memory
//! system and the driver. It includes:
//! 1. **Memory Map:** Default text and data segment bases.
//! 2. **Instruction Constants:** Word size and trap request codes.

/// Default base address of the text (instruction) segment.
pub const TEXT_BASE: u32 = 0x0040_0000;

/// Default base address of the data segment.
pub const DATA_BASE: u32 = 0x1000_0000;

/// Initial value of the global pointer (`$gp`).
pub const GLOBAL_POINTER: u32 = 0x1000_8000;

/// Size of one instruction or data word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Trap request: print a newline.
pub const TRAP_PRINT_NEWLINE: u32 = 0x0;

/// Trap request: print `rs` as a signed integer.
pub const TRAP_PRINT_INT: u32 = 0x1;

/// Trap request: read a signed integer into `rt`.
pub const TRAP_READ_INT: u32 = 0x5;

/// Trap request: stop the simulation.
pub const TRAP_STOP: u32 = 0xa;

/// Mask selecting the request code from a trap's target field.
pub const TRAP_CODE_MASK: u32 = 0xf;
