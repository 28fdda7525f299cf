// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use crate::error::Result;

/// Register transport of a DDS chip.
///
/// The conversion layer is transport agnostic; a connector adapts it to
/// whatever actually carries the register traffic (SPI, a lab bus adapter,
/// a simulator). Implementations report bus failures through
/// [`Error::Transport`](crate::error::Error::Transport), e.g. via
/// [`Error::transport`](crate::error::Error::transport).
pub trait Connector {
    /// Reads `width` bits at `location` and returns them as bytes.
    fn read(&mut self, location: u8, width: u32) -> Result<Vec<u8>>;

    /// Reads all registers and returns them as bytes.
    fn read_all(&mut self) -> Result<Vec<u8>>;

    /// Writes `data` to `location`.
    fn write(&mut self, location: u8, data: &[u8]) -> Result<()>;

    /// Resets the connected DDS.
    fn reset_device(&mut self) -> Result<()>;

    /// Pulses the I/O update pin so staged register writes take effect.
    fn update_io(&mut self) -> Result<()>;

    /// Pauses (`true`) or unpauses (`false`) the digital ramp generator.
    fn set_drhold(&mut self, hold: bool) -> Result<()>;
}
