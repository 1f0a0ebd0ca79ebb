//! Architectural Register File.
//!
//! This module provides the `RegisterFile` struct, the complete architectural
//! register state of the processor. It provides:
//! 1. **Unified Storage:** The 32 general-purpose registers plus the `hi`/`lo` accumulators.
//! 2. **Initial State:** Global and stack pointer set-up for a fresh run.
//! 3. **Observability:** A register dump in the classic four-per-row layout.

use std::fmt;

use crate::core::arch::gpr::{Gpr, NUM_GPRS};
use crate::isa::abi;

/// General-purpose registers plus the multiply/divide accumulators.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
    /// Upper half of the last multiply, or remainder of the last divide.
    pub hi: u32,
    /// Lower half of the last multiply, or quotient of the last divide.
    pub lo: u32,
}

impl RegisterFile {
    /// Creates a register file with all registers and accumulators zeroed.
    pub const fn new() -> Self {
        Self {
            gpr: Gpr::new(),
            hi: 0,
            lo: 0,
        }
    }

    /// Creates the register file a program starts with: `$gp` and `$sp` set,
    /// everything else zero.
    pub const fn with_pointers(global_pointer: u32, stack_pointer: u32) -> Self {
        let mut regs = Self::new();
        regs.write(abi::REG_GP, global_pointer);
        regs.write(abi::REG_SP, stack_pointer);
        regs
    }

    /// Reads a general-purpose register. `$zero` always reads 0.
    #[inline]
    pub const fn read(&self, idx: usize) -> u32 {
        self.gpr.read(idx)
    }

    /// Writes a general-purpose register. Writes to `$zero` are ignored.
    #[inline]
    pub const fn write(&mut self, idx: usize, val: u32) {
        self.gpr.write(idx, val);
    }

    /// Prints the register dump to stdout.
    pub fn dump(&self) {
        print!("{self}");
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..NUM_GPRS {
            write!(f, "    {:<5}: {:08x}", abi::reg_name(i), self.read(i))?;
            if (i + 1) % 4 == 0 {
                writeln!(f)?;
            }
        }
        writeln!(f, "    {:<5}: {:08x}    {:<5}: {:08x}", "hi", self.hi, "lo", self.lo)
    }
}
