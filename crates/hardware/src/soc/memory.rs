//! Simulated Memory Regions.
//!
//! This module implements the byte-array memory behind the instruction and
//! data segments. It provides:
//! 1. **Storage:** A zero-initialised byte vector mapped at a base address.
//! 2. **Word Access:** Aligned 32-bit big-endian loads and stores.
//! 3. **Image Loading:** Bulk copies of program and data images at set-up time.

use crate::common::constants::WORD_BYTES;
use crate::common::{FaultKind, SimError};
use crate::soc::traits::Device;

/// A contiguous memory region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    name: &'static str,
    base: u32,
    bytes: Vec<u8>,
    writable: bool,
}

impl Memory {
    /// Creates a zero-filled region.
    ///
    /// # Arguments
    ///
    /// * `name` - Region name used in diagnostics.
    /// * `base` - First byte address of the region.
    /// * `size` - Size in bytes.
    /// * `writable` - Whether program stores are accepted.
    pub fn new(name: &'static str, base: u32, size: u32, writable: bool) -> Self {
        Self {
            name,
            base,
            bytes: vec![0; size as usize],
            writable,
        }
    }

    /// Copies `data` into the region starting at `offset` bytes from its base.
    ///
    /// Ignores the write permission, so images can be placed in read-only
    /// regions.
    ///
    /// # Errors
    ///
    /// Returns an `OutOfRange` fault at the first byte that does not fit.
    pub fn load(&mut self, data: &[u8], offset: usize) -> Result<(), SimError> {
        let end = offset.saturating_add(data.len());
        let len = self.bytes.len();
        let Some(dst) = self.bytes.get_mut(offset..end) else {
            let first_bad = self.base as usize + offset.max(len);
            return Err(SimError::fault(first_bad as u32, FaultKind::OutOfRange));
        };
        dst.copy_from_slice(data);
        Ok(())
    }

    /// Returns the region contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Validates an access and returns its byte offset.
    const fn offset(&self, addr: u32) -> Result<usize, SimError> {
        if addr % WORD_BYTES != 0 {
            return Err(SimError::fault(addr, FaultKind::Misaligned));
        }
        let offset = addr.wrapping_sub(self.base) as usize;
        if offset + WORD_BYTES as usize > self.bytes.len() {
            return Err(SimError::fault(addr, FaultKind::OutOfRange));
        }
        Ok(offset)
    }
}

impl Device for Memory {
    fn name(&self) -> &str {
        self.name
    }

    fn address_range(&self) -> (u32, u32) {
        (self.base, self.bytes.len() as u32)
    }

    fn is_writable(&self) -> bool {
        self.writable
    }

    fn load_word(&self, addr: u32) -> Result<u32, SimError> {
        let i = self.offset(addr)?;
        let mut word = [0u8; 4];
        word.copy_from_slice(&self.bytes[i..i + 4]);
        Ok(u32::from_be_bytes(word))
    }

    fn store_word(&mut self, addr: u32, val: u32) -> Result<(), SimError> {
        let i = self.offset(addr)?;
        if !self.writable {
            return Err(SimError::fault(addr, FaultKind::ReadOnly));
        }
        self.bytes[i..i + 4].copy_from_slice(&val.to_be_bytes());
        Ok(())
    }
}
