//! Configuration system for the MIPS simulator.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline memory map, flush penalty and decode policy.
//! 2. **Structures:** Hierarchical config for general, memory, pipeline and policy settings.
//! 3. **Validation:** Rejection of memory maps the simulator cannot build.
//!
//! Configuration is supplied as JSON (`mipsim run --config`) or built with `Config::default()`.

use std::path::Path;

use serde::Deserialize;

use crate::common::SimError;
use crate::common::constants::WORD_BYTES;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants;

    /// Base address of the instruction memory.
    pub const TEXT_BASE: u32 = constants::TEXT_BASE;

    /// Size of the instruction memory (1 MiB).
    pub const TEXT_SIZE: u32 = 1024 * 1024;

    /// Base address of the data memory.
    pub const DATA_BASE: u32 = constants::DATA_BASE;

    /// Size of the data memory (1 MiB).
    ///
    /// The stack pointer starts at `DATA_BASE + DATA_SIZE` and grows down.
    pub const DATA_SIZE: u32 = 1024 * 1024;

    /// Initial `$gp`.
    pub const GLOBAL_POINTER: u32 = constants::GLOBAL_POINTER;

    /// Cycles charged for a taken branch or jump.
    pub const FLUSH_PENALTY: u32 = 2;
}

/// Root configuration structure.
///
/// Every section and field is optional in JSON; omitted values take their defaults.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::{Config, Severity};
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "pipeline": { "flush_penalty": 3, "forwarding": true },
///     "policy": { "unknown_function": "Fatal" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.pipeline.flush_penalty, 3);
/// assert!(config.pipeline.forwarding);
/// assert_eq!(config.policy.unknown_function, Severity::Fatal);
/// assert_eq!(config.policy.unknown_opcode, Severity::Fatal);
/// assert_eq!(config.memory.data_base, 0x1000_0000);
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory map
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Pipeline accounting parameters
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Handling of encodings outside the modelled subset
    #[serde(default)]
    pub policy: PolicyConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the text is not valid JSON for this
    /// structure or describes an invalid memory map.
    pub fn from_json(text: &str) -> Result<Self, SimError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| SimError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Load`] if the file cannot be read, otherwise the
    /// errors of [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SimError::Load {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&text)
    }

    /// Checks that the memory map can be built.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] for zero-sized or misaligned regions,
    /// regions that wrap the 32-bit address space, overlapping split regions,
    /// a unified memory that does not contain the data region, a zero flush
    /// penalty, or a start PC outside the instruction memory.
    pub fn validate(&self) -> Result<(), SimError> {
        let m = &self.memory;
        let text = checked_region("text", m.text_base, m.text_size)?;
        let data = checked_region("data", m.data_base, m.data_size)?;

        if m.unified {
            if data.0 < text.0 || data.1 > text.1 {
                return Err(SimError::Config(format!(
                    "data region {:#x}..{:#x} must lie inside the unified memory {:#x}..{:#x}",
                    data.0, data.1, text.0, text.1
                )));
            }
        } else if text.0 < data.1 && data.0 < text.1 {
            return Err(SimError::Config(format!(
                "text region {:#x}..{:#x} overlaps data region {:#x}..{:#x}",
                text.0, text.1, data.0, data.1
            )));
        }

        if self.pipeline.flush_penalty == 0 {
            return Err(SimError::Config(
                "flush_penalty must be at least one cycle".to_owned(),
            ));
        }

        let pc = u64::from(self.general.start_pc);
        if pc % u64::from(WORD_BYTES) != 0 || pc < text.0 || pc >= text.1 {
            return Err(SimError::Config(format!(
                "start_pc {:#x} is not an aligned address inside the text region",
                self.general.start_pc
            )));
        }

        Ok(())
    }
}

/// Returns the `[base, end)` span of a region after checking size and alignment.
fn checked_region(name: &str, base: u32, size: u32) -> Result<(u64, u64), SimError> {
    if size == 0 {
        return Err(SimError::Config(format!("{name} region has zero size")));
    }
    if base % WORD_BYTES != 0 || size % WORD_BYTES != 0 {
        return Err(SimError::Config(format!(
            "{name} region base {base:#x} and size {size:#x} must be word aligned"
        )));
    }
    let end = u64::from(base) + u64::from(size);
    if end > 1 << 32 {
        return Err(SimError::Config(format!(
            "{name} region {base:#x} + {size:#x} exceeds the 32-bit address space"
        )));
    }
    Ok((u64::from(base), end))
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Log a disassembly line for every retired instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Log the register file after every retired instruction
    #[serde(default)]
    pub trace_registers: bool,

    /// Log the pipeline slot diagram after every retired instruction
    #[serde(default)]
    pub trace_pipeline: bool,

    /// Initial PC value (defaults to the text base)
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u32 {
        defaults::TEXT_BASE
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            trace_registers: false,
            trace_pipeline: false,
            start_pc: defaults::TEXT_BASE,
        }
    }
}

/// Memory map of the instruction and data regions, split or unified.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MemoryConfig {
    /// Instruction memory base address
    #[serde(default = "MemoryConfig::default_text_base")]
    pub text_base: u32,

    /// Instruction memory size in bytes
    #[serde(default = "MemoryConfig::default_text_size")]
    pub text_size: u32,

    /// Data memory base address
    #[serde(default = "MemoryConfig::default_data_base")]
    pub data_base: u32,

    /// Data memory size in bytes
    #[serde(default = "MemoryConfig::default_data_size")]
    pub data_size: u32,

    /// Initial `$gp`
    #[serde(default = "MemoryConfig::default_global_pointer")]
    pub global_pointer: u32,

    /// Serve fetches, loads and stores from one read-write memory at the text
    /// region; the data region must then lie inside it
    #[serde(default)]
    pub unified: bool,
}

impl MemoryConfig {
    /// Returns the default instruction memory base.
    const fn default_text_base() -> u32 {
        defaults::TEXT_BASE
    }

    /// Returns the default instruction memory size.
    const fn default_text_size() -> u32 {
        defaults::TEXT_SIZE
    }

    /// Returns the default data memory base.
    const fn default_data_base() -> u32 {
        defaults::DATA_BASE
    }

    /// Returns the default data memory size.
    const fn default_data_size() -> u32 {
        defaults::DATA_SIZE
    }

    /// Returns the default global pointer.
    const fn default_global_pointer() -> u32 {
        defaults::GLOBAL_POINTER
    }

    /// Initial `$sp`: one past the end of the data memory.
    pub const fn stack_pointer(&self) -> u32 {
        self.data_base.wrapping_add(self.data_size)
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            text_base: defaults::TEXT_BASE,
            text_size: defaults::TEXT_SIZE,
            data_base: defaults::DATA_BASE,
            data_size: defaults::DATA_SIZE,
            global_pointer: defaults::GLOBAL_POINTER,
            unified: false,
        }
    }
}

/// Pipeline accounting parameters.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Cycles charged after a taken branch, `j`, `jal` or `jr`; at least 1
    #[serde(default = "PipelineConfig::default_flush_penalty")]
    pub flush_penalty: u32,

    /// Model a forwarding network (ALU results after EX2, loads after MEM2)
    #[serde(default)]
    pub forwarding: bool,
}

impl PipelineConfig {
    /// Returns the default flush penalty.
    const fn default_flush_penalty() -> u32 {
        defaults::FLUSH_PENALTY
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            flush_penalty: defaults::FLUSH_PENALTY,
            forwarding: false,
        }
    }
}

/// How a diagnostic condition is handled.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum Severity {
    /// Log a warning and continue; the instruction retires with no effect.
    Warn,
    /// Stop the run with an error.
    Fatal,
}

/// Handling of instruction encodings outside the modelled subset.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Unknown function code under the special opcode
    #[serde(default = "PolicyConfig::default_unknown_function")]
    pub unknown_function: Severity,

    /// Unknown major opcode
    #[serde(default = "PolicyConfig::default_unknown_opcode")]
    pub unknown_opcode: Severity,
}

impl PolicyConfig {
    /// Unknown function codes warn by default.
    const fn default_unknown_function() -> Severity {
        Severity::Warn
    }

    /// Unknown opcodes stop the run by default.
    const fn default_unknown_opcode() -> Severity {
        Severity::Fatal
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            unknown_function: Severity::Warn,
            unknown_opcode: Severity::Fatal,
        }
    }
}
