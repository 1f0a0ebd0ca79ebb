//! Simulation statistics collection and reporting.
//!
//! This module reports the performance of a finished (or aborted) run. It provides:
//! 1. **Snapshot:** Final PC, retired instructions and every hazard-tracker counter.
//! 2. **Derived metrics:** CPI and instruction-mix percentages, guarded against empty runs.
//! 3. **Rendering:** Text report by section (`summary`, `hazards`, `mix`) and JSON.

use std::fmt;

use serde::Serialize;

use crate::core::pipeline::hazards::HazardTracker;

/// Names of the report sections, in print order.
pub const SECTIONS: [&str; 3] = ["summary", "hazards", "mix"];

/// Snapshot of the performance counters at the end of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// PC after the last executed instruction.
    pub final_pc: u32,
    /// Instructions retired (the stop trap is not counted).
    pub instructions: u64,
    /// Total cycles, including the pipeline startup cost.
    pub cycles: u64,
    /// Stall cycles inserted for data hazards.
    pub bubbles: u64,
    /// Cycles lost to control-flow flushes.
    pub flushes: u64,
    /// Loads and stores.
    pub mem_ops: u64,
    /// Conditional branches.
    pub branches: u64,
    /// Conditional branches taken.
    pub taken: u64,
}

impl SimStats {
    /// Copies the counters out of a hazard tracker.
    pub const fn collect(final_pc: u32, instructions: u64, hazards: &HazardTracker) -> Self {
        Self {
            final_pc,
            instructions,
            cycles: hazards.cycles(),
            bubbles: hazards.bubbles(),
            flushes: hazards.flushes(),
            mem_ops: hazards.memory_ops(),
            branches: hazards.branches(),
            taken: hazards.taken(),
        }
    }

    /// Cycles per instruction; `0.0` when nothing retired.
    pub fn cpi(&self) -> f64 {
        ratio(self.cycles, self.instructions).unwrap_or(0.0)
    }

    /// Loads and stores as a percentage of instructions.
    pub fn mem_op_percent(&self) -> f64 {
        percent(self.mem_ops, self.instructions).unwrap_or(0.0)
    }

    /// Conditional branches as a percentage of instructions.
    pub fn branch_percent(&self) -> f64 {
        percent(self.branches, self.instructions).unwrap_or(0.0)
    }

    /// Percentage of branches taken; `None` when no branch executed.
    pub fn taken_percent(&self) -> Option<f64> {
        percent(self.taken, self.branches)
    }

    /// Renders the selected sections; an empty selection renders all of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::stats::SimStats;
    ///
    /// let stats = SimStats { instructions: 3, cycles: 10, ..SimStats::default() };
    /// let text = stats.render_sections(&["summary".to_string()]);
    /// assert!(text.contains("CPI: 3.33"));
    /// assert!(!text.contains("Bubbles"));
    /// ```
    pub fn render_sections(&self, sections: &[String]) -> String {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.write_sections(&mut out, sections);
        out
    }

    /// Writes the selected sections; an empty selection writes all of them.
    ///
    /// # Errors
    ///
    /// Propagates errors from `out`.
    pub fn write_sections(&self, out: &mut impl fmt::Write, sections: &[String]) -> fmt::Result {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);

        if want("summary") {
            writeln!(
                out,
                "Program finished at pc = {:#010x} ({} instructions executed)",
                self.final_pc, self.instructions
            )?;
            writeln!(out, "Cycles: {}", self.cycles)?;
            writeln!(out, "CPI: {:.2}", self.cpi())?;
        }
        if want("hazards") {
            writeln!(out, "Bubbles: {}", self.bubbles)?;
            writeln!(out, "Flushes: {}", self.flushes)?;
        }
        if want("mix") {
            writeln!(out, "Mem ops: {:.1}% of instructions", self.mem_op_percent())?;
            writeln!(out, "Branches: {:.1}% of instructions", self.branch_percent())?;
            match self.taken_percent() {
                Some(p) => writeln!(out, "  % Taken: {p:.1}")?,
                None => writeln!(out, "  % Taken: n/a")?,
            }
        }
        Ok(())
    }

    /// Prints the selected sections to stdout.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.render_sections(sections));
    }

    /// Prints the full report to stdout.
    pub fn print(&self) {
        self.print_sections(&[]);
    }

    /// Counters plus derived metrics as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "counters": self,
            "cpi": self.cpi(),
            "mem_op_percent": self.mem_op_percent(),
            "branch_percent": self.branch_percent(),
            "taken_percent": self.taken_percent(),
        })
    }
}

fn ratio(num: u64, den: u64) -> Option<f64> {
    (den != 0).then(|| num as f64 / den as f64)
}

fn percent(num: u64, den: u64) -> Option<f64> {
    ratio(num, den).map(|r| r * 100.0)
}
