//! MIPS General-Purpose Register File.
//!
//! This module implements the 32-entry integer register file. It performs the following:
//! 1. **Storage:** Maintains 32 word-sized registers (`$zero`-`$ra`).
//! 2. **Invariant Enforcement:** Ensures that register `$zero` is hardwired to zero.

/// Number of architectural general-purpose registers.
pub const NUM_GPRS: usize = 32;

/// General-Purpose Register file.
///
/// Register `$zero` is hardwired to zero: writes to it are discarded and reads
/// always return 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_GPRS],
}

impl Gpr {
    /// Creates a register file with every register cleared.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_GPRS],
        }
    }

    /// Reads a register. Indices are masked to five bits.
    #[inline]
    pub const fn read(&self, idx: usize) -> u32 {
        let idx = idx & (NUM_GPRS - 1);
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a register. Writes to `$zero` are ignored.
    #[inline]
    pub const fn write(&mut self, idx: usize, val: u32) {
        let idx = idx & (NUM_GPRS - 1);
        if idx != 0 {
            self.regs[idx] = val;
        }
    }
}
