// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use dds_units::frequency::{Frequency, Hertz, hertz};

use crate::profile::WordWidths;

/// Commonly used chip traits
pub struct DeviceTraits {
    pub widths: WordWidths,
    pub sysclk_max: Frequency<Hertz>,
    /// Resolution of the output DAC in bits.
    pub dac_resolution: u8,
}

/// The supported DDS chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Ad9910,
    Ad9914,
}

impl DeviceKind {
    pub fn traits(&self) -> &'static DeviceTraits {
        DeviceTraits::from_device_kind(self)
    }
}

impl DeviceTraits {
    pub fn from_device_kind(kind: &DeviceKind) -> &'static Self {
        match kind {
            DeviceKind::Ad9910 => &AD9910_TRAITS,
            DeviceKind::Ad9914 => &AD9914_TRAITS,
        }
    }
}

/// Analog Devices AD9910, a 1 GS/s DDS with a 14 bit output DAC.
pub const AD9910_TRAITS: DeviceTraits = DeviceTraits {
    widths: WordWidths {
        ftw: 32,
        pow: 16,
        asf: 14,
    },
    sysclk_max: hertz(1e9),
    dac_resolution: 14,
};

/// Analog Devices AD9914, a 3.5 GS/s DDS with a 12 bit output DAC.
pub const AD9914_TRAITS: DeviceTraits = DeviceTraits {
    widths: WordWidths {
        ftw: 32,
        pow: 16,
        asf: 12,
    },
    sysclk_max: hertz(3.5e9),
    dac_resolution: 12,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_lookup() {
        let traits = DeviceKind::Ad9910.traits();
        assert_eq!(traits.widths.ftw, 32);
        assert_eq!(traits.widths.pow, 16);
        assert_eq!(traits.widths.asf, 14);
        assert_eq!(traits.sysclk_max, hertz(1e9));
        assert_eq!(traits.dac_resolution, 14);

        let traits = DeviceTraits::from_device_kind(&DeviceKind::Ad9914);
        assert_eq!(traits.widths.asf, 12);
        assert_eq!(traits.sysclk_max, hertz(3.5e9));
    }
}
