//! MIPS Instruction Decoder.
//!
//! This module turns a raw 32-bit instruction word into an [`Instruction`].
//! Immediates are sign- or zero-extended according to the operation, trap
//! request codes are extracted from the target field, and any opcode or
//! function code outside the modelled subset is reported as an
//! [`UnsupportedKind`] so the driver can apply its decode policy.

use crate::common::UnsupportedKind;
use crate::common::constants::TRAP_CODE_MASK;
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::mips::{funct, opcodes};

/// Decodes a raw instruction word.
///
/// # Errors
///
/// Returns [`UnsupportedKind::Function`] for an unknown function code under
/// `OP_SPECIAL` and [`UnsupportedKind::Opcode`] for an unknown major opcode.
pub fn decode(inst: u32) -> Result<Instruction, UnsupportedKind> {
    let rs = inst.rs();
    let rt = inst.rt();

    let decoded = match inst.opcode() {
        opcodes::OP_SPECIAL => decode_special(inst)?,
        opcodes::OP_J => Instruction::J {
            target: inst.target(),
        },
        opcodes::OP_JAL => Instruction::Jal {
            target: inst.target(),
        },
        opcodes::OP_BEQ => Instruction::Beq {
            rs,
            rt,
            offset: inst.simm(),
        },
        opcodes::OP_BNE => Instruction::Bne {
            rs,
            rt,
            offset: inst.simm(),
        },
        opcodes::OP_ADDIU => Instruction::Addiu {
            rt,
            rs,
            imm: inst.simm(),
        },
        opcodes::OP_ANDI => Instruction::Andi {
            rt,
            rs,
            imm: inst.uimm(),
        },
        opcodes::OP_LUI => Instruction::Lui {
            rt,
            imm: inst.uimm(),
        },
        opcodes::OP_TRAP => Instruction::Trap {
            rs,
            rt,
            code: inst.target() & TRAP_CODE_MASK,
        },
        opcodes::OP_LW => Instruction::Lw {
            rt,
            rs,
            offset: inst.simm(),
        },
        opcodes::OP_SW => Instruction::Sw {
            rt,
            rs,
            offset: inst.simm(),
        },
        other => return Err(UnsupportedKind::Opcode(other)),
    };

    Ok(decoded)
}

/// Decodes the register-register operations selected by the function field.
fn decode_special(inst: u32) -> Result<Instruction, UnsupportedKind> {
    let rs = inst.rs();
    let rt = inst.rt();
    let rd = inst.rd();

    let decoded = match inst.funct() {
        funct::SLL => Instruction::Sll {
            rd,
            rt,
            shamt: inst.shamt(),
        },
        funct::SRA => Instruction::Sra {
            rd,
            rt,
            shamt: inst.shamt(),
        },
        funct::JR => Instruction::Jr { rs },
        funct::MFHI => Instruction::Mfhi { rd },
        funct::MFLO => Instruction::Mflo { rd },
        funct::MULT => Instruction::Mult { rs, rt },
        funct::DIV => Instruction::Div { rs, rt },
        funct::ADDU => Instruction::Addu { rd, rs, rt },
        funct::SUBU => Instruction::Subu { rd, rs, rt },
        funct::SLT => Instruction::Slt { rd, rs, rt },
        other => return Err(UnsupportedKind::Function(other)),
    };

    Ok(decoded)
}
