//! Simulator: owns the CPU, the memory system and the console side-by-side.
//!
//! Keeping them apart lets [`Cpu::step`] borrow the memory and console
//! mutably while the CPU itself is borrowed mutably.

use std::path::Path;

use crate::common::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::Status;
use crate::sim::loader::{self, ImageFormat};
use crate::soc::System;
use crate::soc::console::{Console, StdConsole};
use crate::stats::SimStats;

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator<C: Console = StdConsole> {
    /// CPU architectural state and hazard tracker.
    pub cpu: Cpu,
    /// Instruction and data memory.
    pub system: System,
    console: C,
}

impl<C: Console> Simulator<C> {
    /// Creates a simulator with empty memories.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if `config` fails validation.
    pub fn new(config: &Config, console: C) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            cpu: Cpu::new(config),
            system: System::new(config),
            console,
        })
    }

    /// Loads a program image file into the text region.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Load`] if the image cannot be read or does not fit.
    pub fn load_program(
        &mut self,
        path: impl AsRef<Path>,
        format: Option<ImageFormat>,
    ) -> Result<usize, SimError> {
        loader::load_program(&mut self.system, path.as_ref(), format)
    }

    /// Loads a data image file into the data region.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Load`] if the image cannot be read or does not fit.
    pub fn load_data(
        &mut self,
        path: impl AsRef<Path>,
        format: Option<ImageFormat>,
    ) -> Result<usize, SimError> {
        loader::load_data(&mut self.system, path.as_ref(), format)
    }

    /// Places instruction words at the start of the text region.
    ///
    /// # Errors
    ///
    /// Faults if the words do not fit.
    pub fn load_words(&mut self, words: &[u32]) -> Result<(), SimError> {
        let image: Vec<u8> = words.iter().flat_map(|w| w.to_be_bytes()).collect();
        self.system.load_text(&image)
    }

    /// Executes one instruction.
    ///
    /// # Errors
    ///
    /// Returns the fatal error raised by the instruction.
    pub fn step(&mut self) -> Result<Status, SimError> {
        self.cpu.step(&mut self.system, &mut self.console)
    }

    /// Runs until the stop trap.
    ///
    /// On error the CPU is left as it was at the failure, so callers can still
    /// dump registers and read [`Simulator::stats`].
    ///
    /// # Errors
    ///
    /// Returns the first fatal error.
    pub fn run(&mut self) -> Result<SimStats, SimError> {
        tracing::info!(pc = format_args!("{:#010x}", self.cpu.pc), "simulation start");
        while self.step()? == Status::Running {}
        let stats = self.stats();
        tracing::info!(
            instructions = stats.instructions,
            cycles = stats.cycles,
            "simulation finished"
        );
        Ok(stats)
    }

    /// Snapshot of the performance counters.
    pub const fn stats(&self) -> SimStats {
        self.cpu.stats()
    }

    /// The console used by trap services.
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Mutable access to the console.
    pub const fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }
}
