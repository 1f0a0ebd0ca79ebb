//! MIPS Application Binary Interface (ABI) register names.
//!
//! Defines the conventional register indices used by the driver and the
//! assembler-style names used by the disassembler and register dumps.

/// Register `$zero` (always zero).
pub const REG_ZERO: usize = 0;
/// Register `$gp` (global pointer).
pub const REG_GP: usize = 28;
/// Register `$sp` (stack pointer).
pub const REG_SP: usize = 29;
/// Register `$ra` (return address, written by `jal`).
pub const REG_RA: usize = 31;

/// Hazard-tracking index for the combined `hi`/`lo` accumulator pair.
///
/// Never used to index the register file; it only tags pending writes in the
/// pipeline model so that `mfhi`/`mflo` see the hazard from `mult`/`div`.
pub const REG_HILO: usize = 32;

/// ABI names for `$0`–`$31`.
const REG_NAMES: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Returns the ABI name for a register index, `"hi/lo"` for [`REG_HILO`].
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    if idx == REG_HILO {
        return "hi/lo";
    }
    REG_NAMES.get(idx).copied().unwrap_or("$??")
}
