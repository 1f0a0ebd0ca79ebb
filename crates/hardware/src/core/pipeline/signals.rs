//! Pipeline control signals and operation types.
//!
//! This module defines the signals decode hands to the later stages. It performs:
//! 1. **Operation Selection:** The ALU operation for the execute stage.
//! 2. **Operand Latching:** Register or immediate values feeding the ALU and the store port.
//! 3. **Memory Control:** Whether the memory stage loads, stores, or passes the ALU result through.
//! 4. **Writeback Control:** Destination register and the `hi`/`lo` update for multiply/divide.

/// ALU operations available to the modelled instruction subset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition. Also used to pass a value through (`a + 0`).
    #[default]
    Add,

    /// Wrapping subtraction.
    Sub,

    /// Bitwise AND.
    And,

    /// Shift left logical.
    Sll,

    /// Shift right arithmetic.
    Sra,

    /// Set less than (signed).
    Slt,

    /// Signed multiply; latches the 64-bit product into `hi`/`lo`.
    Mul,

    /// Signed divide; latches remainder into `hi` and quotient into `lo`.
    Div,
}

/// Data-memory access performed in the memory stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemOp {
    /// Pass the ALU result through.
    #[default]
    None,
    /// Load the word at the ALU result address.
    Load,
    /// Store `store_data` at the ALU result address.
    Store,
}

/// Control and operand signals produced by decode for one instruction.
///
/// The default value is a bubble: no register write, no memory access,
/// `0 + 0` in the ALU.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Write the memory-stage result to `dest_reg` in writeback.
    pub write_dest: bool,
    /// Destination general-purpose register.
    pub dest_reg: usize,
    /// Memory-stage access.
    pub mem_op: MemOp,
    /// Writeback copies the ALU's `hi`/`lo` halves into the accumulators.
    pub mult_div: bool,
    /// Operation for the execute stage.
    pub alu_op: AluOp,
    /// First ALU operand.
    pub alu_src1: u32,
    /// Second ALU operand.
    pub alu_src2: u32,
    /// Value written by a store.
    pub store_data: u32,
}
