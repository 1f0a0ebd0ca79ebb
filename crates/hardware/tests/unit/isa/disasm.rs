//! Disassembler Tests.

use mipsim_core::isa::disasm::disassemble;
use rstest::rstest;

use crate::common::asm::*;

const PC: u32 = 0x0040_0000;

#[rstest]
#[case(nop(), "sll $zero, $zero, 0")]
#[case(sra(T0, T1, 3), "sra $t0, $t1, 3")]
#[case(subu(S0, S1, T0), "subu $s0, $s1, $t0")]
#[case(mult(T0, T1), "mult $t0, $t1")]
#[case(mflo(T2), "mflo $t2")]
#[case(jr(RA), "jr $ra")]
#[case(addiu(SP, SP, -16), "addiu $sp, $sp, -16")]
#[case(andi(T0, T1, 0xffff), "andi $t0, $t1, 65535")]
#[case(lui(T0, 0x1000), "lui $t0, 4096")]
#[case(lw(T0, 8, GP), "lw $t0, 8($gp)")]
#[case(sw(RA, -4, SP), "sw $ra, -4($sp)")]
#[case(beq(T0, 0, -1), "beq $t0, $zero, 400000")]
#[case(bne(T0, T1, 2), "bne $t0, $t1, 40000c")]
#[case(jal(0x0040_0100), "jal 400100")]
#[case(stop(), "trap a")]
fn formats(#[case] raw: u32, #[case] expected: &str) {
    assert_eq!(disassemble(raw, PC), expected);
}

#[test]
fn unknown_encoding() {
    assert_eq!(disassemble(0xfc00_0000, PC), "unknown");
}
