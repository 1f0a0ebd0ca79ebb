//! Instruction encoders for the modelled MIPS subset.
//!
//! Register arguments are plain indices; immediates are truncated to their field width.

use mipsim_core::common::constants::{
    TRAP_PRINT_INT, TRAP_PRINT_NEWLINE, TRAP_READ_INT, TRAP_STOP,
};
use mipsim_core::isa::mips::{funct, opcodes};

fn r_type(rs: usize, rt: usize, rd: usize, shamt: u32, f: u32) -> u32 {
    ((rs as u32 & 0x1f) << 21) | ((rt as u32 & 0x1f) << 16) | ((rd as u32 & 0x1f) << 11)
        | ((shamt & 0x1f) << 6)
        | (f & 0x3f)
}

fn i_type(op: u32, rs: usize, rt: usize, imm: i32) -> u32 {
    (op << 26) | ((rs as u32 & 0x1f) << 21) | ((rt as u32 & 0x1f) << 16) | (imm as u32 & 0xffff)
}

fn j_type(op: u32, target: u32) -> u32 {
    (op << 26) | (target & 0x03ff_ffff)
}

pub fn nop() -> u32 {
    0
}

pub fn sll(rd: usize, rt: usize, shamt: u32) -> u32 {
    r_type(0, rt, rd, shamt, funct::SLL)
}

pub fn sra(rd: usize, rt: usize, shamt: u32) -> u32 {
    r_type(0, rt, rd, shamt, funct::SRA)
}

pub fn jr(rs: usize) -> u32 {
    r_type(rs, 0, 0, 0, funct::JR)
}

pub fn mfhi(rd: usize) -> u32 {
    r_type(0, 0, rd, 0, funct::MFHI)
}

pub fn mflo(rd: usize) -> u32 {
    r_type(0, 0, rd, 0, funct::MFLO)
}

pub fn mult(rs: usize, rt: usize) -> u32 {
    r_type(rs, rt, 0, 0, funct::MULT)
}

pub fn div(rs: usize, rt: usize) -> u32 {
    r_type(rs, rt, 0, 0, funct::DIV)
}

pub fn addu(rd: usize, rs: usize, rt: usize) -> u32 {
    r_type(rs, rt, rd, 0, funct::ADDU)
}

pub fn subu(rd: usize, rs: usize, rt: usize) -> u32 {
    r_type(rs, rt, rd, 0, funct::SUBU)
}

pub fn slt(rd: usize, rs: usize, rt: usize) -> u32 {
    r_type(rs, rt, rd, 0, funct::SLT)
}

/// `j` to an absolute address in the same 256 MiB region.
pub fn j(addr: u32) -> u32 {
    j_type(opcodes::OP_J, addr >> 2)
}

/// `jal` to an absolute address in the same 256 MiB region.
pub fn jal(addr: u32) -> u32 {
    j_type(opcodes::OP_JAL, addr >> 2)
}

/// `beq` with a word offset relative to the next instruction.
pub fn beq(rs: usize, rt: usize, offset: i32) -> u32 {
    i_type(opcodes::OP_BEQ, rs, rt, offset)
}

/// `bne` with a word offset relative to the next instruction.
pub fn bne(rs: usize, rt: usize, offset: i32) -> u32 {
    i_type(opcodes::OP_BNE, rs, rt, offset)
}

pub fn addiu(rt: usize, rs: usize, imm: i32) -> u32 {
    i_type(opcodes::OP_ADDIU, rs, rt, imm)
}

pub fn andi(rt: usize, rs: usize, imm: u32) -> u32 {
    i_type(opcodes::OP_ANDI, rs, rt, imm as i32)
}

pub fn lui(rt: usize, imm: u32) -> u32 {
    i_type(opcodes::OP_LUI, 0, rt, imm as i32)
}

pub fn lw(rt: usize, offset: i32, rs: usize) -> u32 {
    i_type(opcodes::OP_LW, rs, rt, offset)
}

pub fn sw(rt: usize, offset: i32, rs: usize) -> u32 {
    i_type(opcodes::OP_SW, rs, rt, offset)
}

pub fn trap(rs: usize, rt: usize, code: u32) -> u32 {
    (opcodes::OP_TRAP << 26) | ((rs as u32 & 0x1f) << 21) | ((rt as u32 & 0x1f) << 16) | code
}

pub fn print_newline() -> u32 {
    trap(0, 0, TRAP_PRINT_NEWLINE)
}

pub fn print_int(rs: usize) -> u32 {
    trap(rs, 0, TRAP_PRINT_INT)
}

pub fn read_int(rt: usize) -> u32 {
    trap(0, rt, TRAP_READ_INT)
}

pub fn stop() -> u32 {
    trap(0, 0, TRAP_STOP)
}

// Register indices used throughout the tests.
pub const T0: usize = 8;
pub const T1: usize = 9;
pub const T2: usize = 10;
pub const T3: usize = 11;
pub const T4: usize = 12;
pub const S0: usize = 16;
pub const S1: usize = 17;
pub const GP: usize = 28;
pub const SP: usize = 29;
pub const RA: usize = 31;
