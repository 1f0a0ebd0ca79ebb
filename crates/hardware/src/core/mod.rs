//! Core processor implementation.
//!
//! This module contains the processor driver together with the architectural
//! register storage, the pipeline model and the execution units it drives.

/// Architectural register storage.
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Pipeline model (hazard accounting, decode signals).
pub mod pipeline;

/// Execution units.
pub mod units;

pub use self::cpu::Cpu;
