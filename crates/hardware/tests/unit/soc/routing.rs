//! System Memory Routing Tests.

use mipsim_core::common::{FaultKind, SimError};
use mipsim_core::config::Config;
use mipsim_core::soc::System;
use mipsim_core::soc::traits::Device;

use crate::common::harness::{DATA, TEXT};

fn system() -> System {
    System::new(&Config::default())
}

#[test]
fn regions_follow_config() {
    let sys = system();
    assert_eq!(sys.text.address_range(), (TEXT, 1024 * 1024));
    let data = sys.data.as_ref().unwrap();
    assert_eq!(data.address_range(), (DATA, 1024 * 1024));
    assert_eq!(sys.data_range(), (DATA, 1024 * 1024));
    assert!(!sys.is_unified());
    assert!(!sys.text.is_writable());
    assert!(data.is_writable());
}

#[test]
fn fetch_reads_text_only() {
    let mut sys = system();
    sys.load_text(&[0x24, 0x08, 0x00, 0x01]).unwrap();
    sys.store_word(DATA, 0xdead_beef).unwrap();

    assert_eq!(sys.fetch(TEXT), Ok(0x2408_0001));
    assert_eq!(sys.fetch(DATA), Err(SimError::fault(DATA, FaultKind::OutOfRange)));
}

#[test]
fn data_image_is_big_endian() {
    let mut sys = system();
    sys.load_data(&[0, 0, 0, 1, 0xff, 0xff, 0xff, 0xfe]).unwrap();
    assert_eq!(sys.load_word(DATA), Ok(1));
    assert_eq!(sys.load_word(DATA + 4), Ok(-2_i32 as u32));
}

#[test]
fn loads_fall_back_to_text() {
    let mut sys = system();
    sys.load_text(&[0x12, 0x34, 0x56, 0x78]).unwrap();
    assert_eq!(sys.load_word(TEXT), Ok(0x1234_5678));
}

#[test]
fn store_faults() {
    let mut sys = system();
    assert_eq!(
        sys.store_word(TEXT + 8, 1),
        Err(SimError::fault(TEXT + 8, FaultKind::ReadOnly))
    );
    assert_eq!(
        sys.store_word(DATA + 1, 1),
        Err(SimError::fault(DATA + 1, FaultKind::Misaligned))
    );
    assert_eq!(
        sys.store_word(0x8000_0000, 1),
        Err(SimError::fault(0x8000_0000, FaultKind::OutOfRange))
    );
    assert_eq!(
        sys.load_word(0x8000_0001),
        Err(SimError::fault(0x8000_0001, FaultKind::Misaligned))
    );
}

#[test]
fn oversized_text_image_faults() {
    let mut sys = System::new(&{
        let mut c = Config::default();
        c.memory.text_size = 8;
        c
    });
    assert!(sys.load_text(&[0; 12]).is_err());
}

fn unified() -> System {
    let mut config = Config::default();
    config.memory.unified = true;
    config.memory.data_base = TEXT + 0x8000;
    config.memory.data_size = 0x1000;
    System::new(&config)
}

#[test]
fn unified_memory_is_one_writable_region() {
    let mut sys = unified();
    assert!(sys.is_unified());
    assert!(sys.data.is_none());
    assert!(sys.text.is_writable());

    sys.store_word(TEXT + 4, 0x2409_0007).unwrap();
    assert_eq!(sys.fetch(TEXT + 4), Ok(0x2409_0007));
    assert_eq!(sys.load_word(TEXT + 4), Ok(0x2409_0007));
    assert_eq!(
        sys.load_word(DATA),
        Err(SimError::fault(DATA, FaultKind::OutOfRange))
    );
}

#[test]
fn unified_data_image_lands_in_its_window() {
    let mut sys = unified();
    sys.load_data(&[0, 0, 0, 9]).unwrap();
    assert_eq!(sys.load_word(TEXT + 0x8000), Ok(9));
    assert_eq!(sys.data_range(), (TEXT + 0x8000, 0x1000));

    assert_eq!(
        sys.load_data(&[0; 0x1004]),
        Err(SimError::fault(TEXT + 0x9000, FaultKind::OutOfRange))
    );
}
