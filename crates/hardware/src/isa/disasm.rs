//! Instruction Disassembler.
//!
//! Converts decoded instructions into assembler-style text for the
//! per-instruction trace and for test diagnostics. Branch and jump targets
//! are printed as absolute hexadecimal addresses, immediates in decimal.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! // addu $t0, $t1, $t2
//! let text = disassemble(0x012A_4021, 0x0040_0000);
//! assert_eq!(text, "addu $t0, $t1, $t2");
//! ```

use crate::isa::abi::reg_name;
use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, branch_target, jump_target};

/// Formats a decoded instruction located at `pc`.
pub fn format_instruction(inst: &Instruction, pc: u32) -> String {
    let next_pc = pc.wrapping_add(4);
    match *inst {
        Instruction::Sll { rd, rt, shamt } => {
            format!("sll {}, {}, {shamt}", reg_name(rd), reg_name(rt))
        }
        Instruction::Sra { rd, rt, shamt } => {
            format!("sra {}, {}, {shamt}", reg_name(rd), reg_name(rt))
        }
        Instruction::Jr { rs } => format!("jr {}", reg_name(rs)),
        Instruction::Mfhi { rd } => format!("mfhi {}", reg_name(rd)),
        Instruction::Mflo { rd } => format!("mflo {}", reg_name(rd)),
        Instruction::Mult { rs, rt } => format!("mult {}, {}", reg_name(rs), reg_name(rt)),
        Instruction::Div { rs, rt } => format!("div {}, {}", reg_name(rs), reg_name(rt)),
        Instruction::Addu { rd, rs, rt } => three_reg("addu", rd, rs, rt),
        Instruction::Subu { rd, rs, rt } => three_reg("subu", rd, rs, rt),
        Instruction::Slt { rd, rs, rt } => three_reg("slt", rd, rs, rt),
        Instruction::J { target } => format!("j {:x}", jump_target(next_pc, target)),
        Instruction::Jal { target } => format!("jal {:x}", jump_target(next_pc, target)),
        Instruction::Beq { rs, rt, offset } => format!(
            "beq {}, {}, {:x}",
            reg_name(rs),
            reg_name(rt),
            branch_target(next_pc, offset)
        ),
        Instruction::Bne { rs, rt, offset } => format!(
            "bne {}, {}, {:x}",
            reg_name(rs),
            reg_name(rt),
            branch_target(next_pc, offset)
        ),
        Instruction::Addiu { rt, rs, imm } => {
            format!("addiu {}, {}, {imm}", reg_name(rt), reg_name(rs))
        }
        Instruction::Andi { rt, rs, imm } => {
            format!("andi {}, {}, {imm}", reg_name(rt), reg_name(rs))
        }
        Instruction::Lui { rt, imm } => format!("lui {}, {imm}", reg_name(rt)),
        Instruction::Trap { code, .. } => format!("trap {code:x}"),
        Instruction::Lw { rt, rs, offset } => {
            format!("lw {}, {offset}({})", reg_name(rt), reg_name(rs))
        }
        Instruction::Sw { rt, rs, offset } => {
            format!("sw {}, {offset}({})", reg_name(rt), reg_name(rs))
        }
    }
}

/// Disassembles a raw instruction word located at `pc`.
///
/// Returns `"unknown"` for encodings outside the modelled subset.
pub fn disassemble(raw: u32, pc: u32) -> String {
    decode(raw).map_or_else(|_| String::from("unknown"), |inst| format_instruction(&inst, pc))
}

/// Formats an R-type `op rd, rs, rt` instruction.
fn three_reg(mnemonic: &str, rd: usize, rs: usize, rt: usize) -> String {
    format!(
        "{mnemonic} {}, {}, {}",
        reg_name(rd),
        reg_name(rs),
        reg_name(rt)
    )
}
