//! MIPS-subset pipeline simulator library.
//!
//! This crate executes a reduced MIPS instruction set one instruction at a time
//! while accounting for the cycles an 8-stage pipeline would spend. It provides:
//! 1. **Core:** Register file, ALU, and the driver that runs each instruction.
//! 2. **Pipeline Model:** Hazard tracking with stall, flush and instruction-mix counters.
//! 3. **ISA:** Decoding and disassembly of the supported subset.
//! 4. **Memory system:** Instruction and data memories, address routing and the console.
//! 5. **Simulation:** Loader, configuration, and statistics reporting.

/// Common types and constants (memory map, trap codes, errors, registers).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (driver, pipeline model, execution units).
pub mod core;
/// Instruction set (decode, instruction types, ABI names, disassembly).
pub mod isa;
/// Simulator and image loader.
pub mod sim;
/// System-on-chip (memories, routing, console).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Error type for every fallible operation.
pub use crate::common::SimError;
/// Main CPU type; holds registers, ALU and hazard tracker.
pub use crate::core::Cpu;
/// Top-level simulator.
pub use crate::sim::Simulator;
/// Instruction and data memory; construct with `System::new`.
pub use crate::soc::System;
/// Statistics snapshot.
pub use crate::stats::SimStats;
