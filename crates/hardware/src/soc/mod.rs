//! Memory System Components.
//!
//! This module organizes the components outside the processor core. It provides:
//! 1. **Memory:** The instruction and data regions and their word access rules.
//! 2. **Routing:** Address decoding between split or unified regions (`System`).
//! 3. **Console:** Character I/O used by trap services.

/// Console devices used by trap services.
pub mod console;

/// Byte-array memory regions.
pub mod memory;

/// Device trait for memory regions.
pub mod traits;

use crate::common::constants::WORD_BYTES;
use crate::common::{FaultKind, SimError};
use crate::config::Config;
use crate::soc::memory::Memory;
use crate::soc::traits::Device;

/// The memory system seen by the processor.
///
/// With split memories, instruction fetches are served by the text region
/// only. Loads are served by the data region, falling back to the text region
/// so that constants placed in the text segment are readable. Stores into the
/// text region fault.
///
/// With a unified memory, the text region is a single read-write memory that
/// serves fetches, loads and stores; the configured data region is a window
/// inside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct System {
    /// Instruction memory; the whole address space when unified.
    pub text: Memory,
    /// Separate data memory, `None` when unified.
    pub data: Option<Memory>,
    data_window: (u32, u32),
}

impl System {
    /// Builds the memory map described by `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration; only the `memory` section is used.
    ///
    /// # Returns
    ///
    /// A `System` with every region zero-filled.
    pub fn new(config: &Config) -> Self {
        let m = &config.memory;
        let data_window = (m.data_base, m.data_size);
        if m.unified {
            return Self {
                text: Memory::new("memory", m.text_base, m.text_size, true),
                data: None,
                data_window,
            };
        }
        Self {
            text: Memory::new("text", m.text_base, m.text_size, false),
            data: Some(Memory::new("data", m.data_base, m.data_size, true)),
            data_window,
        }
    }

    /// Whether fetches, loads and stores share one memory.
    pub const fn is_unified(&self) -> bool {
        self.data.is_none()
    }

    /// `(base, size)` of the data region, inside the shared memory when unified.
    pub const fn data_range(&self) -> (u32, u32) {
        self.data_window
    }

    /// Fetches the instruction word at `pc`.
    ///
    /// # Errors
    ///
    /// Faults if `pc` is misaligned or outside the text region.
    pub fn fetch(&self, pc: u32) -> Result<u32, SimError> {
        self.text.load_word(pc)
    }

    /// Loads a data word.
    ///
    /// # Errors
    ///
    /// Faults if `addr` is misaligned or outside every region.
    pub fn load_word(&self, addr: u32) -> Result<u32, SimError> {
        self.route(addr)?.load_word(addr)
    }

    /// Stores a data word.
    ///
    /// # Errors
    ///
    /// Faults if `addr` is misaligned, outside every region, or in a
    /// read-only text region.
    pub fn store_word(&mut self, addr: u32, val: u32) -> Result<(), SimError> {
        match self.data.as_mut() {
            Some(data) if data.contains(addr) => data.store_word(addr, val),
            _ if self.text.contains(addr) => self.text.store_word(addr, val),
            _ => Err(unmapped(addr)),
        }
    }

    /// Copies a program image to the start of the text region.
    ///
    /// # Errors
    ///
    /// Faults if the image is larger than the region.
    pub fn load_text(&mut self, image: &[u8]) -> Result<(), SimError> {
        self.text.load(image, 0)
    }

    /// Copies a data image to the start of the data region.
    ///
    /// # Errors
    ///
    /// Faults if the image is larger than the region.
    pub fn load_data(&mut self, image: &[u8]) -> Result<(), SimError> {
        let (base, size) = self.data_window;
        if image.len() > size as usize {
            return Err(SimError::fault(
                base.wrapping_add(size),
                FaultKind::OutOfRange,
            ));
        }
        if let Some(data) = self.data.as_mut() {
            return data.load(image, 0);
        }
        let offset = base.wrapping_sub(self.text.address_range().0);
        self.text.load(image, offset as usize)
    }

    fn route(&self, addr: u32) -> Result<&dyn Device, SimError> {
        match &self.data {
            Some(data) if data.contains(addr) => Ok(data),
            _ if self.text.contains(addr) => Ok(&self.text),
            _ => Err(unmapped(addr)),
        }
    }
}

/// Fault for an address no region claims; alignment is reported first.
const fn unmapped(addr: u32) -> SimError {
    if addr % WORD_BYTES != 0 {
        SimError::fault(addr, FaultKind::Misaligned)
    } else {
        SimError::fault(addr, FaultKind::OutOfRange)
    }
}
