//! Simulation driver and program loading.
//!
//! Provides the top-level [`Simulator`] and the loader for program and data
//! images.

/// Program and data image loading.
pub mod loader;

/// Top-level simulator owning the CPU, memory and console.
pub mod simulator;

pub use simulator::Simulator;
