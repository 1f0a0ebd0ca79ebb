//! ALU arithmetic operations.
//!
//! Implements wrapping addition and subtraction and the signed
//! multiply/divide pair that produce a `(hi, lo)` result.

use crate::core::pipeline::signals::AluOp;

/// Number of bits in a word (used to split the 64-bit product).
const WORD_BITS: u32 = 32;

/// Executes `Add` or `Sub`; any other operation yields `0`.
pub const fn add_sub(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}

/// Signed 32×32 → 64-bit multiply, returned as `(hi, lo)`.
pub const fn multiply(a: u32, b: u32) -> (u32, u32) {
    let product = (a as i32 as i64) * (b as i32 as i64);
    ((product >> WORD_BITS) as u32, product as u32)
}

/// Signed divide, returned as `(remainder, quotient)`.
///
/// Division by zero yields quotient `0xffff_ffff` and leaves the dividend as
/// the remainder; `i32::MIN / -1` wraps to `i32::MIN` with remainder 0.
pub const fn divide(a: u32, b: u32) -> (u32, u32) {
    let (a, b) = (a as i32, b as i32);
    if b == 0 {
        return (a as u32, u32::MAX);
    }
    (a.wrapping_rem(b) as u32, a.wrapping_div(b) as u32)
}
