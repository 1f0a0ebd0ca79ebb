//! Device trait for word-addressed memory regions.
//!
//! This module defines the `Device` trait implemented by every region attached
//! to the system. It provides:
//! 1. **Identification:** `name` and `address_range` for routing.
//! 2. **Access:** Aligned word load and store at absolute addresses.
//! 3. **Permissions:** Whether the region accepts stores from the program.

use crate::common::SimError;

/// A word-addressed region of the simulated address space.
pub trait Device {
    /// Returns a short name for this region (e.g., `"text"`, `"data"`).
    fn name(&self) -> &str;

    /// Returns `(base_address, size_in_bytes)` for this region.
    fn address_range(&self) -> (u32, u32);

    /// Whether program stores are accepted.
    fn is_writable(&self) -> bool {
        true
    }

    /// Returns `true` if `addr` falls inside the region.
    fn contains(&self, addr: u32) -> bool {
        let (base, size) = self.address_range();
        addr.wrapping_sub(base) < size
    }

    /// Loads the aligned word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns a memory fault for misaligned or out-of-range addresses.
    fn load_word(&self, addr: u32) -> Result<u32, SimError>;

    /// Stores `val` at the aligned word `addr`.
    ///
    /// # Errors
    ///
    /// Returns a memory fault for misaligned, out-of-range or read-only accesses.
    fn store_word(&mut self, addr: u32, val: u32) -> Result<(), SimError>;
}
