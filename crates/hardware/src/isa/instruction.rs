//! Instruction encoding and decoded-instruction types.
//!
//! Provides bit extraction for the fixed 32-bit MIPS formats and the
//! `Instruction` sum type produced by the decoder. Each variant carries only
//! the fields its operation uses, and knows which registers it reads and
//! writes so the driver can report hazards without re-inspecting raw bits.

use crate::isa::abi;

/// Bit mask for a 5-bit register specifier.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the shift-amount field.
pub const SHAMT_MASK: u32 = 0x1F;
/// Bit mask for the function field.
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump target field.
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Field extraction for raw MIPS instruction words.
pub trait InstructionBits {
    /// Major opcode (bits 31-26).
    fn opcode(&self) -> u32;
    /// First source register (bits 25-21).
    fn rs(&self) -> usize;
    /// Second source or immediate-form destination register (bits 20-16).
    fn rt(&self) -> usize;
    /// R-type destination register (bits 15-11).
    fn rd(&self) -> usize;
    /// Shift amount (bits 10-6).
    fn shamt(&self) -> u32;
    /// Function code (bits 5-0).
    fn funct(&self) -> u32;
    /// Zero-extended 16-bit immediate.
    fn uimm(&self) -> u32;
    /// Sign-extended 16-bit immediate.
    fn simm(&self) -> i32;
    /// 26-bit jump target (word index within the current 256 MiB region).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self >> 26
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> 21) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> 16) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 11) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> 6) & SHAMT_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn uimm(&self) -> u32 {
        self & IMM_MASK
    }

    #[inline(always)]
    fn simm(&self) -> i32 {
        i32::from((self & IMM_MASK) as u16 as i16)
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// Register written by an instruction, as seen by the hazard model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    /// General-purpose register whose value comes out of the ALU.
    Register(usize),
    /// General-purpose register whose value comes from a data-memory load.
    Load(usize),
    /// The combined `hi`/`lo` pair written by `mult` and `div`.
    HiLo,
}

impl Destination {
    /// Hazard-tracking index of the destination.
    pub const fn index(self) -> usize {
        match self {
            Self::Register(r) | Self::Load(r) => r,
            Self::HiLo => abi::REG_HILO,
        }
    }
}

/// A decoded instruction of the modelled subset.
///
/// Variant fields carry the MIPS field names: `rs`, `rt`, `rd` are register
/// indices, `imm`/`offset` the extended immediate, `target` the 26-bit jump
/// index and `code` the trap request.
#[allow(missing_docs)] // fields are the encoding fields named above
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `rd = rt << shamt`.
    Sll { rd: usize, rt: usize, shamt: u32 },
    /// `rd = rt >> shamt` (arithmetic).
    Sra { rd: usize, rt: usize, shamt: u32 },
    /// `pc = rs`.
    Jr { rs: usize },
    /// `rd = hi`.
    Mfhi { rd: usize },
    /// `rd = lo`.
    Mflo { rd: usize },
    /// `hi:lo = rs * rt` (signed).
    Mult { rs: usize, rt: usize },
    /// `lo = rs / rt`, `hi = rs % rt` (signed).
    Div { rs: usize, rt: usize },
    /// `rd = rs + rt`.
    Addu { rd: usize, rs: usize, rt: usize },
    /// `rd = rs - rt`.
    Subu { rd: usize, rs: usize, rt: usize },
    /// `rd = (rs < rt) ? 1 : 0` (signed).
    Slt { rd: usize, rs: usize, rt: usize },
    /// Jump within the current 256 MiB region.
    J { target: u32 },
    /// Jump and link into `$ra`.
    Jal { target: u32 },
    /// Branch to `pc + 4 + (offset << 2)` if `rs == rt`.
    Beq { rs: usize, rt: usize, offset: i32 },
    /// Branch to `pc + 4 + (offset << 2)` if `rs != rt`.
    Bne { rs: usize, rt: usize, offset: i32 },
    /// `rt = rs + imm`.
    Addiu { rt: usize, rs: usize, imm: i32 },
    /// `rt = rs & imm` (zero-extended immediate).
    Andi { rt: usize, rs: usize, imm: u32 },
    /// `rt = imm << 16`.
    Lui { rt: usize, imm: u32 },
    /// Simulator system service selected by `code`.
    Trap { rs: usize, rt: usize, code: u32 },
    /// `rt = M[rs + offset]`.
    Lw { rt: usize, rs: usize, offset: i32 },
    /// `M[rs + offset] = rt`.
    Sw { rt: usize, rs: usize, offset: i32 },
}

impl Instruction {
    /// Registers read by the instruction, in the order they are reported to
    /// the hazard tracker.
    ///
    /// Trap sources depend on the requested service, so the driver reports
    /// those itself.
    pub const fn sources(&self) -> [Option<usize>; 2] {
        match *self {
            Self::Sll { rt, .. } | Self::Sra { rt, .. } => [Some(rt), None],
            Self::Jr { rs } => [Some(rs), None],
            Self::Mfhi { .. } | Self::Mflo { .. } => [Some(abi::REG_HILO), None],
            Self::Mult { rs, rt }
            | Self::Div { rs, rt }
            | Self::Addu { rs, rt, .. }
            | Self::Subu { rs, rt, .. }
            | Self::Slt { rs, rt, .. }
            | Self::Beq { rs, rt, .. }
            | Self::Bne { rs, rt, .. } => [Some(rs), Some(rt)],
            Self::Addiu { rs, .. } | Self::Andi { rs, .. } | Self::Lw { rs, .. } => {
                [Some(rs), None]
            }
            Self::Sw { rt, rs, .. } => [Some(rt), Some(rs)],
            Self::J { .. } | Self::Jal { .. } | Self::Lui { .. } | Self::Trap { .. } => {
                [None, None]
            }
        }
    }

    /// Register the instruction will write, if any.
    pub const fn destination(&self) -> Option<Destination> {
        match *self {
            Self::Sll { rd, .. }
            | Self::Sra { rd, .. }
            | Self::Mfhi { rd }
            | Self::Mflo { rd }
            | Self::Addu { rd, .. }
            | Self::Subu { rd, .. }
            | Self::Slt { rd, .. } => Some(Destination::Register(rd)),
            Self::Addiu { rt, .. } | Self::Andi { rt, .. } | Self::Lui { rt, .. } => {
                Some(Destination::Register(rt))
            }
            Self::Lw { rt, .. } => Some(Destination::Load(rt)),
            Self::Jal { .. } => Some(Destination::Register(abi::REG_RA)),
            Self::Mult { .. } | Self::Div { .. } => Some(Destination::HiLo),
            Self::Jr { .. }
            | Self::J { .. }
            | Self::Beq { .. }
            | Self::Bne { .. }
            | Self::Trap { .. }
            | Self::Sw { .. } => None,
        }
    }

    /// True for loads and stores.
    pub const fn is_memory_op(&self) -> bool {
        matches!(self, Self::Lw { .. } | Self::Sw { .. })
    }

    /// True for conditional branches.
    ///
    /// `j`, `jal` and `jr` are excluded so the branch percentage counts only
    /// `beq`/`bne`; they still flush when they redirect.
    pub const fn is_branch(&self) -> bool {
        matches!(self, Self::Beq { .. } | Self::Bne { .. })
    }
}

/// Target of a taken branch; `next_pc` is the address after the branch.
#[inline]
pub const fn branch_target(next_pc: u32, offset: i32) -> u32 {
    next_pc.wrapping_add(offset.wrapping_shl(2) as u32)
}

/// Target of `j`/`jal`; keeps the upper four bits of `next_pc`.
#[inline]
pub const fn jump_target(next_pc: u32, target: u32) -> u32 {
    (next_pc & 0xF000_0000) | ((target & TARGET_MASK) << 2)
}
