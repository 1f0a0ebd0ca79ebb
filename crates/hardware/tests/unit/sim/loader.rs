//! Image Loader Tests.

use std::io::Write;
use std::path::Path;

use mipsim_core::common::SimError;
use mipsim_core::config::Config;
use mipsim_core::sim::loader::{ImageFormat, parse_hex, read_image};
use mipsim_core::sim::Simulator;
use mipsim_core::soc::console::BufferConsole;
use tempfile::NamedTempFile;

use crate::common::asm::*;
use crate::common::harness::{DATA, TEXT};

fn temp_with(suffix: &str, bytes: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

fn hex_program(words: &[u32]) -> String {
    words.iter().map(|w| format!("{w:08x}\n")).collect()
}

#[test]
fn format_from_extension() {
    assert_eq!(ImageFormat::from_path(Path::new("a.hex")), ImageFormat::Hex);
    assert_eq!(ImageFormat::from_path(Path::new("a.TXT")), ImageFormat::Hex);
    assert_eq!(ImageFormat::from_path(Path::new("a.bin")), ImageFormat::Binary);
    assert_eq!(ImageFormat::from_path(Path::new("a")), ImageFormat::Binary);
}

#[test]
fn hex_comments_and_blank_lines() {
    let text = "# header\n\n0x00000001 # one\n  FFFFFFFF  \n";
    assert_eq!(
        parse_hex(text).unwrap(),
        vec![0, 0, 0, 1, 0xff, 0xff, 0xff, 0xff]
    );
}

#[test]
fn hex_rejects_bad_words() {
    let err = parse_hex("00000000\nnot-hex\n").unwrap_err();
    assert!(err.starts_with("line 2"), "{err}");
    assert!(parse_hex("123456789").is_err());
}

#[test]
fn explicit_format_overrides_extension() {
    let file = temp_with(".bin", b"00000001\n");
    assert_eq!(
        read_image(file.path(), Some(ImageFormat::Hex)).unwrap(),
        vec![0, 0, 0, 1]
    );
}

#[test]
fn missing_file_is_a_load_error() {
    let err = read_image(Path::new("/nonexistent/prog.bin"), None).unwrap_err();
    assert!(matches!(err, SimError::Load { .. }));
}

#[test]
fn hex_program_runs() {
    let file = temp_with(
        ".hex",
        hex_program(&[addiu(T0, 0, 6), addiu(T1, 0, 7), mult(T0, T1), mflo(T2), stop()]).as_bytes(),
    );
    let mut sim = Simulator::new(&Config::default(), BufferConsole::new()).unwrap();
    assert_eq!(sim.load_program(file.path(), None).unwrap(), 20);

    let stats = sim.run().unwrap();
    assert_eq!(sim.cpu.regs.read(T2), 42);
    assert_eq!(stats.instructions, 4);
}

#[test]
fn binary_program_and_data_image() {
    let program: Vec<u8> = [lw(T0, 4, GP), stop()]
        .iter()
        .flat_map(|w| w.to_be_bytes())
        .collect();
    let prog = temp_with(".bin", &program);

    let mut data = vec![0u8; 0x8008];
    data[0x8004..0x8008].copy_from_slice(&0x0bad_f00d_u32.to_be_bytes());
    let data_file = temp_with(".bin", &data);

    let mut sim = Simulator::new(&Config::default(), BufferConsole::new()).unwrap();
    let _ = sim.load_program(prog.path(), None).unwrap();
    let _ = sim.load_data(data_file.path(), None).unwrap();
    assert_eq!(sim.system.load_word(DATA + 0x8004), Ok(0x0bad_f00d));

    let _ = sim.run().unwrap();
    assert_eq!(sim.cpu.regs.read(T0), 0x0bad_f00d);
    assert_eq!(sim.cpu.pc, TEXT + 8);
}

#[test]
fn oversized_image_is_rejected() {
    let mut config = Config::default();
    config.memory.text_size = 8;
    let file = temp_with(".bin", &[0; 12]);
    let mut sim = Simulator::new(&config, BufferConsole::new()).unwrap();

    let err = sim.load_program(file.path(), None).unwrap_err();
    assert!(matches!(err, SimError::Load { ref reason, .. } if reason.contains("12 bytes")));
}
