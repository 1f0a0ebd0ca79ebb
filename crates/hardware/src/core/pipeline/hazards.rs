//! Pipeline Hazard Accounting.
//!
//! This module implements a shadow model of an 8-stage in-order pipeline. The
//! simulator executes one instruction at a time, but this tracker records where
//! each in-flight destination register would sit in a real pipeline. It provides:
//! 1. **Hazard Detection:** Read-after-write dependencies on registers whose
//!    producer has not yet reached writeback.
//! 2. **Stall Accounting:** Bubbles inserted behind the decode stage until the
//!    value is available, with or without a forwarding network.
//! 3. **Flush Accounting:** Cycles lost to discarding fetched instructions after
//!    a taken control transfer.
//! 4. **Instruction Mix:** Memory-operation, branch and taken-branch counters.

use std::fmt;

use crate::isa::abi::{REG_ZERO, reg_name};

/// Number of pipeline stages modelled by the tracker.
pub const NUM_STAGES: usize = 8;

/// Cycles spent filling the pipeline before the first instruction retires.
pub const STARTUP_CYCLES: u64 = NUM_STAGES as u64 - 1;

/// Pipeline stages, oldest-last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// First fetch cycle.
    Fetch1,
    /// Second fetch cycle.
    Fetch2,
    /// Decode and register read.
    Decode,
    /// First execute cycle.
    Execute1,
    /// Second execute cycle; ALU results are ready at its end.
    Execute2,
    /// First memory cycle.
    Memory1,
    /// Second memory cycle; load data is ready at its end.
    Memory2,
    /// Register file write.
    Writeback,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Self; NUM_STAGES] = [
        Self::Fetch1,
        Self::Fetch2,
        Self::Decode,
        Self::Execute1,
        Self::Execute2,
        Self::Memory1,
        Self::Memory2,
        Self::Writeback,
    ];

    /// Position of the stage in the slot array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short mnemonic used in pipeline diagrams.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Fetch1 => "IF1",
            Self::Fetch2 => "IF2",
            Self::Decode => "ID",
            Self::Execute1 => "EX1",
            Self::Execute2 => "EX2",
            Self::Memory1 => "MEM1",
            Self::Memory2 => "MEM2",
            Self::Writeback => "WB",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A register write that has been issued but not yet committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingWrite {
    /// Destination register index (`32` is the combined `hi`/`lo` pair).
    pub reg: usize,
    /// Stage at whose end the value can be forwarded.
    pub ready: Stage,
}

/// Shadow pipeline model and performance counters.
///
/// The driver reports, for every instruction in program order, the registers
/// it reads and writes, and then either advances the clock or charges a flush.
/// The tracker converts those events into cycle, bubble and flush counts.
///
/// # Examples
///
/// ```
/// use mipsim_core::core::pipeline::hazards::HazardTracker;
///
/// let mut hz = HazardTracker::new(false);
///
/// // addu $t0, $t1, $t2
/// hz.record_source_read(9);
/// hz.record_source_read(10);
/// hz.record_destination_write(8);
/// hz.advance_clock();
///
/// // subu $t1, $t0, $t2 depends on the previous instruction
/// hz.record_source_read(8);
/// assert_eq!(hz.bubbles(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HazardTracker {
    slots: [Option<PendingWrite>; NUM_STAGES],
    forwarding: bool,
    cycles: u64,
    bubbles: u64,
    flushes: u64,
    memory_ops: u64,
    branches: u64,
    taken: u64,
}

impl Default for HazardTracker {
    fn default() -> Self {
        Self::new(false)
    }
}

impl HazardTracker {
    /// Creates an empty pipeline with the startup cost already charged.
    ///
    /// # Arguments
    ///
    /// * `forwarding` - When `true`, dependent reads wait only until the
    ///   producer's result is ready for forwarding instead of until writeback.
    pub const fn new(forwarding: bool) -> Self {
        Self {
            slots: [None; NUM_STAGES],
            forwarding,
            cycles: STARTUP_CYCLES,
            bubbles: 0,
            flushes: 0,
            memory_ops: 0,
            branches: 0,
            taken: 0,
        }
    }

    /// Advances every in-flight write one stage and charges one cycle.
    pub const fn advance_clock(&mut self) {
        self.cycles += 1;
        self.shift(Stage::Fetch1);
    }

    /// Reports that the instruction in decode reads `reg`.
    ///
    /// Inserts as many bubbles as needed for the youngest pending write to
    /// `reg` to become visible. Register 0 never stalls.
    pub fn record_source_read(&mut self, reg: usize) {
        if reg == REG_ZERO {
            return;
        }

        let Some((stage, pending)) = self.youngest_pending(reg) else {
            return;
        };

        let available = if self.forwarding {
            pending.ready
        } else {
            Stage::Writeback
        };
        let stalls = available.index().saturating_sub(stage.index());

        if stalls > 0 {
            tracing::trace!(
                reg,
                stage = %stage,
                stalls,
                "read-after-write hazard"
            );
        }
        for _ in 0..stalls {
            self.insert_bubble();
        }
    }

    /// Reports that the instruction in decode will write `reg` from the ALU.
    pub const fn record_destination_write(&mut self, reg: usize) {
        self.record_pending(reg, Stage::Execute2);
    }

    /// Reports that the instruction in decode will write `reg` with load data.
    ///
    /// Without forwarding this behaves exactly like
    /// [`record_destination_write`](Self::record_destination_write).
    pub const fn record_load_destination(&mut self, reg: usize) {
        self.record_pending(reg, Stage::Memory2);
    }

    /// Inserts one bubble between decode and execute.
    ///
    /// Everything from `Execute1` onward moves forward one stage while the
    /// front end holds still.
    pub const fn insert_bubble(&mut self) {
        self.bubbles += 1;
        self.cycles += 1;
        self.shift(Stage::Execute1);
    }

    /// Charges `count` flush cycles after a taken control transfer.
    ///
    /// Each flush cycle replaces a clock advance.
    pub const fn insert_flush(&mut self, count: u32) {
        let mut i = 0;
        while i < count {
            self.cycles += 1;
            self.flushes += 1;
            self.shift(Stage::Fetch1);
            i += 1;
        }
    }

    /// Counts a load or store.
    pub const fn count_memory_op(&mut self) {
        self.memory_ops += 1;
    }

    /// Counts a conditional branch.
    pub const fn count_branch(&mut self) {
        self.branches += 1;
    }

    /// Counts a taken conditional branch.
    pub const fn count_taken(&mut self) {
        self.taken += 1;
    }

    /// Total cycles, including the startup cost.
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Stall cycles inserted for data hazards.
    pub const fn bubbles(&self) -> u64 {
        self.bubbles
    }

    /// Cycles lost to control-flow flushes.
    pub const fn flushes(&self) -> u64 {
        self.flushes
    }

    /// Loads and stores seen.
    pub const fn memory_ops(&self) -> u64 {
        self.memory_ops
    }

    /// Conditional branches seen.
    pub const fn branches(&self) -> u64 {
        self.branches
    }

    /// Conditional branches taken.
    pub const fn taken(&self) -> u64 {
        self.taken
    }

    /// Whether the forwarding network is modelled.
    pub const fn forwarding(&self) -> bool {
        self.forwarding
    }

    /// Current slot contents, indexed by [`Stage::index`].
    pub const fn slots(&self) -> &[Option<PendingWrite>; NUM_STAGES] {
        &self.slots
    }

    /// Pending write held in `stage`, if any.
    pub const fn slot(&self, stage: Stage) -> Option<PendingWrite> {
        self.slots[stage.index()]
    }

    /// One-line picture of the pipeline, e.g. `IF1:-- IF2:-- ID:$t0 ...`.
    pub fn diagram(&self) -> String {
        let mut out = String::new();
        for (stage, slot) in Stage::ALL.iter().zip(self.slots.iter()) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(stage.mnemonic());
            out.push(':');
            match slot {
                Some(p) => out.push_str(reg_name(p.reg)),
                None => out.push_str("--"),
            }
        }
        out
    }

    const fn record_pending(&mut self, reg: usize, ready: Stage) {
        if reg != REG_ZERO {
            self.slots[Stage::Decode.index()] = Some(PendingWrite { reg, ready });
        }
    }

    /// Youngest pending write to `reg` inside the hazard window.
    fn youngest_pending(&self, reg: usize) -> Option<(Stage, PendingWrite)> {
        let window = Stage::Execute1.index()..Stage::Writeback.index();
        self.slots[window.clone()]
            .iter()
            .zip(&Stage::ALL[window])
            .find_map(|(slot, &stage)| match slot {
                Some(p) if p.reg == reg => Some((stage, *p)),
                _ => None,
            })
    }

    /// Moves slots `from..Writeback` one stage toward writeback and empties `from`.
    const fn shift(&mut self, from: Stage) {
        let lo = from.index();
        let mut i = NUM_STAGES - 1;
        while i > lo {
            self.slots[i] = self.slots[i - 1];
            i -= 1;
        }
        self.slots[lo] = None;
    }
}
