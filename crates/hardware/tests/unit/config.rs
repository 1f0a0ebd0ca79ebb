//! # Configuration Tests
//!
//! Tests for configuration defaults, JSON deserialization and validation.

use mipsim_core::common::SimError;
use mipsim_core::config::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert!(!config.general.trace_registers);
    assert!(!config.general.trace_pipeline);
    assert_eq!(config.general.start_pc, 0x0040_0000);
    assert!(config.validate().is_ok());
}

#[test]
fn test_memory_config_defaults() {
    let memory = MemoryConfig::default();
    assert_eq!(memory.text_base, 0x0040_0000);
    assert_eq!(memory.text_size, 1024 * 1024);
    assert_eq!(memory.data_base, 0x1000_0000);
    assert_eq!(memory.data_size, 1024 * 1024);
    assert_eq!(memory.global_pointer, 0x1000_8000);
    assert_eq!(memory.stack_pointer(), 0x1010_0000);
}

#[test]
fn test_pipeline_and_policy_defaults() {
    let pipeline = PipelineConfig::default();
    assert_eq!(pipeline.flush_penalty, 2);
    assert!(!pipeline.forwarding);

    let policy = PolicyConfig::default();
    assert_eq!(policy.unknown_function, Severity::Warn);
    assert_eq!(policy.unknown_opcode, Severity::Fatal);
}

#[test]
fn test_empty_json_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn test_partial_sections_keep_other_defaults() {
    let config = Config::from_json(r#"{ "memory": { "data_size": 4096 } }"#).unwrap();
    assert_eq!(config.memory.data_size, 4096);
    assert_eq!(config.memory.data_base, 0x1000_0000);
    assert_eq!(config.memory.stack_pointer(), 0x1000_1000);
    assert_eq!(config.pipeline, PipelineConfig::default());
}

#[test]
fn test_severity_names() {
    let config = Config::from_json(
        r#"{ "policy": { "unknown_function": "Fatal", "unknown_opcode": "Warn" } }"#,
    )
    .unwrap();
    assert_eq!(config.policy.unknown_function, Severity::Fatal);
    assert_eq!(config.policy.unknown_opcode, Severity::Warn);

    assert!(Config::from_json(r#"{ "policy": { "unknown_opcode": "Ignore" } }"#).is_err());
}

#[test]
fn test_malformed_json_is_config_error() {
    assert!(matches!(
        Config::from_json("{ general: }"),
        Err(SimError::Config(_))
    ));
}

#[test]
fn test_validate_rejects_zero_size() {
    let mut config = Config::default();
    config.memory.data_size = 0;
    assert!(matches!(config.validate(), Err(SimError::Config(msg)) if msg.contains("zero")));
}

#[test]
fn test_validate_rejects_misaligned_region() {
    let mut config = Config::default();
    config.memory.text_size = 1022;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_overlap() {
    let mut config = Config::default();
    config.memory.data_base = 0x0040_1000;
    assert!(matches!(config.validate(), Err(SimError::Config(msg)) if msg.contains("overlaps")));
}

#[test]
fn test_unified_memory_accepts_shared_region() {
    let mut config = Config::default();
    config.memory.unified = true;
    config.memory.data_base = config.memory.text_base;
    config.memory.data_size = config.memory.text_size;
    assert_eq!(config.validate(), Ok(()));

    let json = r#"{ "memory": { "unified": true, "data_base": 4456448, "data_size": 65536 } }"#;
    let parsed = Config::from_json(json).unwrap();
    assert!(parsed.memory.unified);
    assert_eq!(parsed.memory.data_base, 0x0044_0000);
}

#[test]
fn test_unified_memory_must_contain_data_region() {
    let mut config = Config::default();
    config.memory.unified = true;
    assert!(matches!(config.validate(), Err(SimError::Config(msg)) if msg.contains("inside")));
}

#[test]
fn test_validate_rejects_zero_flush_penalty() {
    let mut config = Config::default();
    config.pipeline.flush_penalty = 0;
    assert!(matches!(config.validate(), Err(SimError::Config(msg)) if msg.contains("flush_penalty")));
    assert!(Config::from_json(r#"{ "pipeline": { "flush_penalty": 0 } }"#).is_err());
}

#[test]
fn test_validate_rejects_wrapping_region() {
    let mut config = Config::default();
    config.memory.data_base = 0xffff_f000;
    config.memory.data_size = 0x2000;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_start_pc_outside_text() {
    let mut config = Config::default();
    config.general.start_pc = 0x1000_0000;
    assert!(config.validate().is_err());

    config.general.start_pc = 0x0040_0002;
    assert!(config.validate().is_err());
}

#[test]
fn test_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    std::fs::write(&path, r#"{ "pipeline": { "forwarding": true } }"#).unwrap();

    assert!(Config::from_file(&path).unwrap().pipeline.forwarding);
    assert!(matches!(
        Config::from_file(dir.path().join("missing.json")),
        Err(SimError::Load { .. })
    ));
}
