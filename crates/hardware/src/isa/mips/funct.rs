//! MIPS Function Codes.
//!
//! Defines the function field values (bits 5-0) used under `OP_SPECIAL`.

/// Shift left logical (SLL).
pub const SLL: u32 = 0x00;

/// Shift right arithmetic (SRA).
pub const SRA: u32 = 0x03;

/// Jump register (JR).
pub const JR: u32 = 0x08;

/// Move from HI (MFHI).
pub const MFHI: u32 = 0x10;

/// Move from LO (MFLO).
pub const MFLO: u32 = 0x12;

/// Signed multiply into HI/LO (MULT).
pub const MULT: u32 = 0x18;

/// Signed divide into HI/LO (DIV).
pub const DIV: u32 = 0x1a;

/// Add unsigned (ADDU).
pub const ADDU: u32 = 0x21;

/// Subtract unsigned (SUBU).
pub const SUBU: u32 = 0x23;

/// Set on less than, signed (SLT).
pub const SLT: u32 = 0x2a;
