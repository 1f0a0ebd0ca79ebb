//! ALU shift operations.
//!
//! Implements shift-left logical (SLL) and shift-right arithmetic (SRA).
//! Shift amounts are masked to 5 bits (0–31).

use crate::core::pipeline::signals::AluOp;

/// Bit mask for the shift amount.
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift; `a` is the value, `b` the shift amount.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    let sh = b & SHAMT_MASK;
    match op {
        AluOp::Sll => a << sh,
        AluOp::Sra => ((a as i32) >> sh) as u32,
        _ => 0,
    }
}
