//! ALU logical and comparison operations.

use crate::core::pipeline::signals::AluOp;

/// Executes `And` or `Slt`; any other operation yields `0`.
///
/// `Slt` compares the operands as signed words and returns 1 or 0.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::And => a & b,
        AluOp::Slt => ((a as i32) < (b as i32)) as u32,
        _ => 0,
    }
}
