//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Constants:** Memory map defaults and trap request codes.
//! 2. **Error Handling:** The `SimError` taxonomy and its detail enums.
//! 3. **Register Management:** The architectural register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::{FaultKind, SimError, UnsupportedKind};
pub use reg::RegisterFile;
