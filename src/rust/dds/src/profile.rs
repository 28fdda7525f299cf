// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use dds_units::frequency::{Frequency, Hertz};

use crate::device_traits::DeviceKind;
use crate::error::{Error, Result};
use crate::value::MAX_WORD_WIDTH;

/// The tuning word kinds a DDS chip consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordKind {
    /// Frequency tuning word.
    Ftw,
    /// Phase offset word.
    Pow,
    /// Amplitude scale factor.
    Asf,
}

impl fmt::Display for WordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordKind::Ftw => write!(f, "FTW"),
            WordKind::Pow => write!(f, "POW"),
            WordKind::Asf => write!(f, "ASF"),
        }
    }
}

/// Tuning word widths of a device, in bits. A width of zero means the word
/// is not configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordWidths {
    pub ftw: u32,
    pub pow: u32,
    pub asf: u32,
}

impl WordWidths {
    pub fn width(&self, kind: WordKind) -> u32 {
        match kind {
            WordKind::Ftw => self.ftw,
            WordKind::Pow => self.pow,
            WordKind::Asf => self.asf,
        }
    }
}

/// Conversion parameters of one DDS device: the tuning word widths and the
/// system clock its frequency axis is referenced to.
///
/// A profile is validated once at construction and read-only afterwards, so
/// a value that exists is always safe to convert against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceProfile {
    widths: WordWidths,
    sysclk: Frequency<Hertz>,
}

impl DeviceProfile {
    /// Validates the configuration and builds the profile.
    ///
    /// Fails with [`Error::MissingWidthConfiguration`] if a width was left
    /// unset, with [`Error::InvalidWidth`] if a width exceeds
    /// [`MAX_WORD_WIDTH`] bits and with [`Error::InvalidClockType`] if the
    /// system clock is not a finite positive frequency.
    pub fn new(widths: WordWidths, sysclk: Frequency<Hertz>) -> Result<Self> {
        for kind in [WordKind::Ftw, WordKind::Pow, WordKind::Asf] {
            let width = widths.width(kind);
            if width == 0 {
                return Err(Error::MissingWidthConfiguration(kind));
            }
            if width > MAX_WORD_WIDTH {
                return Err(Error::InvalidWidth(width));
            }
        }
        let clock = f64::from(sysclk);
        if !clock.is_finite() || clock <= 0.0 {
            return Err(Error::InvalidClockType(clock));
        }
        Ok(DeviceProfile { widths, sysclk })
    }

    /// Builds the profile of a known chip running at `sysclk`.
    ///
    /// The clock additionally has to stay within the chip's rating.
    pub fn for_device(kind: DeviceKind, sysclk: Frequency<Hertz>) -> Result<Self> {
        let traits = kind.traits();
        if sysclk > traits.sysclk_max {
            return Err(Error::InvalidClockType(f64::from(sysclk)));
        }
        DeviceProfile::new(traits.widths, sysclk)
    }

    /// Width of the given tuning word in bits.
    pub fn width(&self, kind: WordKind) -> u32 {
        self.widths.width(kind)
    }

    pub fn sysclk(&self) -> Frequency<Hertz> {
        self.sysclk
    }
}
