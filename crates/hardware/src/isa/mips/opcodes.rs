//! MIPS Major Opcodes.
//!
//! Defines the primary opcodes (bits 31-26) of the modelled instruction subset.

/// Register-register operations; the function field selects the operation.
pub const OP_SPECIAL: u32 = 0x00;

/// Jump (J).
pub const OP_J: u32 = 0x02;

/// Jump and link (JAL).
pub const OP_JAL: u32 = 0x03;

/// Branch on equal (BEQ).
pub const OP_BEQ: u32 = 0x04;

/// Branch on not equal (BNE).
pub const OP_BNE: u32 = 0x05;

/// Add immediate unsigned (ADDIU), no overflow trap.
pub const OP_ADDIU: u32 = 0x09;

/// AND with zero-extended immediate (ANDI).
pub const OP_ANDI: u32 = 0x0c;

/// Load upper immediate (LUI).
pub const OP_LUI: u32 = 0x0f;

/// Simulator system service (TRAP).
pub const OP_TRAP: u32 = 0x1a;

/// Load word (LW).
pub const OP_LW: u32 = 0x23;

/// Store word (SW).
pub const OP_SW: u32 = 0x2b;
