//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! processor state. It coordinates the following:
//! 1. **State Management:** Maintains registers, the program counter and the ALU latches.
//! 2. **Pipeline Accounting:** Owns the hazard tracker driven by every retired instruction.
//! 3. **Decode Policy:** Decides whether unsupported encodings warn or stop the run.
//! 4. **Observability:** Instruction, register and pipeline tracing switches.

/// Instruction execution: fetch, decode, execute, memory and writeback.
pub mod execution;

use crate::common::RegisterFile;
use crate::config::{Config, PolicyConfig};
use crate::core::pipeline::hazards::HazardTracker;
use crate::core::units::alu::Alu;
use crate::stats::SimStats;

/// Whether the processor can take another step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The last instruction retired normally.
    Running,
    /// The stop trap has executed.
    Halted,
}

/// Which per-instruction traces are logged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraceFlags {
    /// Disassembly line.
    pub instructions: bool,
    /// Register file.
    pub registers: bool,
    /// Pipeline slot diagram.
    pub pipeline: bool,
}

/// Main CPU structure containing all processor state.
///
/// Instructions execute one at a time; the [`HazardTracker`] accounts for the
/// cycles a pipelined implementation of the same instruction stream would take.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers and `hi`/`lo`.
    pub regs: RegisterFile,
    /// Program Counter.
    pub pc: u32,
    /// Integer ALU.
    pub alu: Alu,
    /// Shadow pipeline and performance counters.
    pub hazards: HazardTracker,
    /// Instructions retired (the stop trap is not counted).
    pub instructions: u64,
    /// Set once the stop trap executes.
    pub halted: bool,
    /// Per-instruction tracing switches.
    pub trace: TraceFlags,

    flush_penalty: u32,
    policy: PolicyConfig,
}

impl Cpu {
    /// Creates a CPU in its reset state.
    ///
    /// # Arguments
    ///
    /// * `config` - The simulator configuration parameters.
    ///
    /// # Returns
    ///
    /// A `Cpu` with `$gp` and `$sp` initialised, the PC at `general.start_pc`
    /// and the pipeline startup cost already charged.
    pub fn new(config: &Config) -> Self {
        let regs = RegisterFile::with_pointers(
            config.memory.global_pointer,
            config.memory.stack_pointer(),
        );

        Self {
            regs,
            pc: config.general.start_pc,
            alu: Alu::new(),
            hazards: HazardTracker::new(config.pipeline.forwarding),
            instructions: 0,
            halted: false,
            trace: TraceFlags {
                instructions: config.general.trace_instructions || cfg!(feature = "always-trace"),
                registers: config.general.trace_registers,
                pipeline: config.general.trace_pipeline,
            },
            flush_penalty: config.pipeline.flush_penalty,
            policy: config.policy.clone(),
        }
    }

    /// Snapshot of the performance counters.
    pub const fn stats(&self) -> SimStats {
        SimStats::collect(self.pc, self.instructions, &self.hazards)
    }

    /// Prints the register file to stdout.
    pub fn dump_registers(&self) {
        self.regs.dump();
    }
}
