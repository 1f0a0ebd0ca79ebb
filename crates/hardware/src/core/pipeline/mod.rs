//! Pipeline model.
//!
//! This module contains the pieces that describe the 8-stage pipeline the
//! simulator accounts for. It includes the following components:
//! 1. **Hazards:** The shadow pipeline that converts register reads, writes and
//!    control transfers into cycle, bubble and flush counts.
//! 2. **Signals:** Control signals generated during instruction decode.

/// Shadow pipeline model and hazard accounting.
pub mod hazards;

/// Control signals generated during instruction decode.
pub mod signals;
