//! Unsupported Encoding Policy Tests.

use mipsim_core::common::{SimError, UnsupportedKind};
use mipsim_core::config::{Config, Severity};

use crate::common::asm::*;
use crate::common::harness::{TEXT, TestContext};

/// Special opcode with an unassigned function code.
const BAD_FUNCT: u32 = 0x0000_003f;
/// Unassigned major opcode.
const BAD_OPCODE: u32 = 0xfc00_0000;

#[test]
fn unknown_function_warns_and_retires() {
    let mut ctx = TestContext::new().load_program(&[BAD_FUNCT, addiu(T0, 0, 1), stop()]);
    let stats = ctx.run();

    assert_eq!(stats.instructions, 2);
    assert_eq!(stats.cycles, 9);
    assert_eq!(ctx.get_reg(T0), 1);
}

#[test]
fn unknown_function_can_be_fatal() {
    let mut config = Config::default();
    config.policy.unknown_function = Severity::Fatal;
    let mut ctx = TestContext::with_config(config).load_program(&[BAD_FUNCT, stop()]);

    assert_eq!(
        ctx.try_run(),
        Err(SimError::UnsupportedOperation {
            pc: TEXT,
            raw: BAD_FUNCT,
            kind: UnsupportedKind::Function(0x3f),
        })
    );
}

#[test]
fn unknown_opcode_is_fatal() {
    let mut ctx = TestContext::new().load_program(&[addiu(T0, 0, 1), BAD_OPCODE, stop()]);
    let err = ctx.try_run().unwrap_err();

    assert_eq!(
        err,
        SimError::UnsupportedOperation {
            pc: TEXT + 4,
            raw: BAD_OPCODE,
            kind: UnsupportedKind::Opcode(0x3f),
        }
    );
    // Statistics up to the failure stay readable.
    assert_eq!(ctx.sim.stats().instructions, 1);
}

#[test]
fn unknown_opcode_can_warn() {
    let mut config = Config::default();
    config.policy.unknown_opcode = Severity::Warn;
    let mut ctx = TestContext::with_config(config).load_program(&[BAD_OPCODE, stop()]);
    assert_eq!(ctx.run().instructions, 1);
}
