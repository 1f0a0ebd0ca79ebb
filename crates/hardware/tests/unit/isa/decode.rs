//! Decoder Tests.

use mipsim_core::common::UnsupportedKind;
use mipsim_core::isa::abi::{REG_HILO, REG_RA};
use mipsim_core::isa::decode::decode;
use mipsim_core::isa::instruction::{Destination, Instruction, InstructionBits};
use proptest::prelude::*;

use crate::common::asm::*;

// ══════════════════════════════════════════════════════════
// 1. Field extraction
// ══════════════════════════════════════════════════════════

#[test]
fn r_type_fields() {
    let inst = addu(T0, T1, T2);
    assert_eq!(inst.opcode(), 0);
    assert_eq!((inst.rs(), inst.rt(), inst.rd()), (T1, T2, T0));
    assert_eq!(inst.funct(), 0x21);
}

#[test]
fn jump_target_field() {
    assert_eq!(jal(0x0040_0010).target(), 0x0010_0004);
}

proptest! {
    #[test]
    fn simm_round_trips_through_encoder(imm in i16::MIN..=i16::MAX) {
        prop_assert_eq!(addiu(T0, T1, i32::from(imm)).simm(), i32::from(imm));
    }

    #[test]
    fn decode_never_panics(word in any::<u32>()) {
        let _ = decode(word);
    }
}

// ══════════════════════════════════════════════════════════
// 2. Hazard classification
// ══════════════════════════════════════════════════════════

#[test]
fn store_reads_value_then_base() {
    let inst = decode(sw(T0, 4, SP)).unwrap();
    assert_eq!(inst.sources(), [Some(T0), Some(SP)]);
    assert_eq!(inst.destination(), None);
    assert!(inst.is_memory_op());
}

#[test]
fn load_destination_is_marked() {
    let inst = decode(lw(T0, 0, GP)).unwrap();
    assert_eq!(inst.destination(), Some(Destination::Load(T0)));
    assert_eq!(inst.sources(), [Some(GP), None]);
}

#[test]
fn hilo_reads_and_writes() {
    let m = decode(mult(T0, T1)).unwrap();
    assert_eq!(m.destination(), Some(Destination::HiLo));
    assert_eq!(Destination::HiLo.index(), REG_HILO);

    let hi = decode(mfhi(T2)).unwrap();
    assert_eq!(hi.sources(), [Some(REG_HILO), None]);
    assert_eq!(hi.destination(), Some(Destination::Register(T2)));
}

#[test]
fn jal_writes_ra() {
    let inst = decode(jal(0x0040_0000)).unwrap();
    assert_eq!(inst.destination(), Some(Destination::Register(REG_RA)));
    assert!(!inst.is_branch());
}

#[test]
fn lui_and_slt_have_destinations() {
    assert_eq!(
        decode(lui(T0, 1)).unwrap().destination(),
        Some(Destination::Register(T0))
    );
    assert_eq!(
        decode(slt(T1, T2, T3)).unwrap().destination(),
        Some(Destination::Register(T1))
    );
}

#[test]
fn branches_are_classified() {
    assert!(decode(beq(T0, T1, 3)).unwrap().is_branch());
    assert!(decode(bne(T0, T1, -3)).unwrap().is_branch());
    assert!(!decode(jr(RA)).unwrap().is_branch());
}

#[test]
fn trap_code_is_low_nibble() {
    assert_eq!(
        decode(print_int(T0)).unwrap(),
        Instruction::Trap {
            rs: T0,
            rt: 0,
            code: 1
        }
    );
}

#[test]
fn unsupported_encodings() {
    assert_eq!(decode(0x0000_0001), Err(UnsupportedKind::Function(1)));
    assert_eq!(decode(0x2000_0000), Err(UnsupportedKind::Opcode(0x08)));
}
