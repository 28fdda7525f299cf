// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use dds_units::frequency::{Frequency, Hertz};
use log::debug;

use crate::connector::Connector;
use crate::device_traits::DeviceKind;
use crate::error::{Error, Result};
use crate::profile::DeviceProfile;

/// Reference clock conditioning for the device bring-up: whether the input
/// divider is bypassed, and the PLL enable with its feedback divider and
/// PFD input doubler settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PllConfig {
    pub divider_bypass: bool,
    pub enable: bool,
    pub n: Option<u8>,
    pub pfd_input_doubler: Option<bool>,
}

/// A single tone: frequency, phase offset and amplitude relative to full
/// scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneProfile {
    pub frequency: Frequency<Hertz>,
    /// Phase offset angle in radians, within `[0, 2π)`.
    pub phase: f64,
    /// Amplitude in dB to full scale.
    pub amplitude: f64,
}

/// One DDS chip behind a register transport.
///
/// Owns the validated conversion profile of the chip and the connector that
/// carries its register traffic. The control surface beyond reset, I/O
/// update and ramp hold is declared but not wired up yet; those operations
/// fail with [`Error::NotImplemented`].
pub struct DdsDevice<C> {
    kind: DeviceKind,
    profile: DeviceProfile,
    connector: C,
}

impl<C: Connector> DdsDevice<C> {
    /// Builds the device for a chip running at `sysclk`, validating the
    /// conversion profile as in [`DeviceProfile::for_device`].
    pub fn new(kind: DeviceKind, sysclk: Frequency<Hertz>, connector: C) -> Result<Self> {
        let profile = DeviceProfile::for_device(kind, sysclk)?;
        Ok(DdsDevice {
            kind,
            profile,
            connector,
        })
    }

    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    /// Raw register access for operations this driver does not cover.
    pub fn connector_mut(&mut self) -> &mut C {
        &mut self.connector
    }

    /// Resets the chip through the transport.
    pub fn reset(&mut self) -> Result<()> {
        self.connector.reset_device()
    }

    /// Makes staged register writes take effect.
    pub fn io_update(&mut self) -> Result<()> {
        self.connector.update_io()
    }

    /// Holds or releases the digital ramp at its current value.
    pub fn set_ramp_hold(&mut self, hold: bool) -> Result<()> {
        self.connector.set_drhold(hold)
    }

    /// Brings the chip up from the given reference clock.
    ///
    /// The register sequence is not wired up yet.
    pub fn init(&mut self, refclk: Frequency<Hertz>, pll: PllConfig) -> Result<()> {
        debug!("init requested for {:?}: refclk {refclk}, {pll:?}", self.kind);
        Err(Error::NotImplemented("clock and PLL bring-up"))
    }

    /// Programs one output channel with a single tone.
    ///
    /// The register sequence is not wired up yet.
    pub fn set_waveform(&mut self, channel: u8, tone: ToneProfile) -> Result<()> {
        debug!("waveform requested for channel {channel}: {tone:?}");
        Err(Error::NotImplemented("single tone profile programming"))
    }
}
