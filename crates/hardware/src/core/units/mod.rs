//! Execution units and functional components.

/// Arithmetic Logic Unit for integer, multiply and divide operations.
pub mod alu;
