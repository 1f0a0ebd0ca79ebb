//! Forwarding Mode Tests.
//!
//! With forwarding, ALU results are available after `Execute2` and load
//! data after `Memory2`, so a load-use dependency costs more than an
//! ALU-use dependency at the same distance.

use mipsim_core::core::pipeline::hazards::HazardTracker;
use rstest::rstest;

use crate::common::asm::{GP, S0, T0, T1, addiu, addu, lw, stop};
use crate::common::harness::TestContext;

fn producer(hz: &mut HazardTracker, is_load: bool) {
    if is_load {
        hz.record_load_destination(T0);
    } else {
        hz.record_destination_write(T0);
    }
    hz.advance_clock();
}

fn stalls_at(distance: usize, is_load: bool) -> u64 {
    let mut hz = HazardTracker::new(true);
    producer(&mut hz, is_load);
    for i in 1..distance {
        hz.record_destination_write(S0 + i);
        hz.advance_clock();
    }
    hz.record_source_read(T0);
    hz.bubbles()
}

#[rstest]
#[case(1, 1)]
#[case(2, 0)]
#[case(3, 0)]
fn alu_use_with_forwarding(#[case] distance: usize, #[case] expected: u64) {
    assert_eq!(stalls_at(distance, false), expected);
}

#[rstest]
#[case(1, 3)]
#[case(2, 2)]
#[case(3, 1)]
#[case(4, 0)]
fn load_use_with_forwarding(#[case] distance: usize, #[case] expected: u64) {
    assert_eq!(stalls_at(distance, true), expected);
}

#[test]
fn load_use_costs_more_than_alu_use() {
    assert!(stalls_at(1, true) > stalls_at(1, false));
}

#[test]
fn forwarding_flag_is_reported() {
    assert!(HazardTracker::new(true).forwarding());
    assert!(!HazardTracker::default().forwarding());
}

#[test]
fn without_forwarding_load_and_alu_use_cost_the_same() {
    for is_load in [false, true] {
        let mut hz = HazardTracker::new(false);
        producer(&mut hz, is_load);
        hz.record_source_read(T0);
        assert_eq!(hz.bubbles(), 4);
    }
}

#[rstest]
#[case(false, 4, 4)]
#[case(true, 3, 1)]
fn load_use_program_against_alu_use_program(
    #[case] forwarding: bool,
    #[case] load_bubbles: u64,
    #[case] alu_bubbles: u64,
) {
    let ctx = |program: &[u32]| {
        let base = if forwarding {
            TestContext::forwarding()
        } else {
            TestContext::new()
        };
        base.load_program(program)
    };

    let load = ctx(&[lw(T0, 0, GP), addu(T1, T0, T0), stop()]).run();
    let alu = ctx(&[addiu(T0, 0, 5), addu(T1, T0, T0), stop()]).run();

    assert_eq!(load.bubbles, load_bubbles);
    assert_eq!(alu.bubbles, alu_bubbles);
}
