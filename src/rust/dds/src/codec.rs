// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

//! Conversions between physical quantities and DDS tuning words.
//!
//! Tuning words are big-endian register images of `width` bytes whose
//! integer value occupies `width` bits. Encoding rounds to the nearest code
//! with ties away from zero. Phases are in radians, amplitudes in dB
//! relative to full scale.

use std::f64::consts::TAU;

use log::warn;

use crate::error::Result;
use crate::profile::{DeviceProfile, WordKind};
use crate::value::{Value, modulus};

impl DeviceProfile {
    /// Returns the frequency tuning word corresponding to the given
    /// frequency in Hz.
    ///
    /// `ftw = round(2^width * f / sysclk)`. Negative frequencies and
    /// frequencies at or above sysclk do not fit the register and fail with
    /// an overflow; frequencies above sysclk/2 encode fine but alias on the
    /// analog side.
    pub fn frequency_to_ftw(&self, frequency: impl Into<Value>) -> Result<Vec<u8>> {
        let frequency = frequency.into().as_number()?;
        let sysclk = f64::from(self.sysclk());
        if frequency > sysclk / 2.0 {
            warn!(
                "frequency {frequency} Hz is above the Nyquist frequency {} Hz and will alias",
                sysclk / 2.0
            );
        }
        let width = self.width(WordKind::Ftw);
        Value::from(modulus(width) * frequency / sysclk).into_bytes(width)
    }

    /// Returns the frequency in Hz corresponding to the given frequency
    /// tuning word.
    pub fn ftw_to_frequency(&self, ftw: impl Into<Value>) -> Result<f64> {
        let width = self.width(WordKind::Ftw);
        Ok(ftw.into().as_number()? * f64::from(self.sysclk()) / modulus(width))
    }

    /// Returns the phase offset word corresponding to the given phase
    /// offset angle in radians, expected within `[0, 2π)`.
    pub fn phase_to_pow(&self, phase: impl Into<Value>) -> Result<Vec<u8>> {
        let phase = phase.into().as_number()?;
        let width = self.width(WordKind::Pow);
        Value::from(phase / TAU * modulus(width)).into_bytes(width)
    }

    /// Returns the phase offset angle in radians corresponding to the given
    /// phase offset word.
    pub fn pow_to_phase(&self, pow: impl Into<Value>) -> Result<f64> {
        let width = self.width(WordKind::Pow);
        Ok(TAU * pow.into().as_number()? / modulus(width))
    }

    /// Returns the amplitude scale factor corresponding to the given
    /// amplitude in dB to full scale.
    ///
    /// `asf = round(10^(a/20) * 2^width)`. Note that 0 dB computes to
    /// `2^width`, one past the register domain, and fails with an overflow;
    /// the largest encodable amplitude is the full scale code
    /// `2^width - 1`.
    pub fn amplitude_to_asf(&self, amplitude: impl Into<Value>) -> Result<Vec<u8>> {
        let amplitude = amplitude.into().as_number()?;
        let width = self.width(WordKind::Asf);
        Value::from(10f64.powf(amplitude / 20.0) * modulus(width)).into_bytes(width)
    }

    /// Returns the amplitude in dB to full scale corresponding to the given
    /// amplitude scale factor. An all-zero word decodes to `-inf`.
    pub fn asf_to_amplitude(&self, asf: impl Into<Value>) -> Result<f64> {
        let width = self.width(WordKind::Asf);
        Ok(20.0 * (asf.into().as_number()? / modulus(width)).log10())
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, TAU};

    use proptest::prelude::*;

    use crate::device_traits::DeviceKind;
    use crate::error::Error;
    use crate::profile::DeviceProfile;
    use dds_units::frequency::hertz;

    macro_rules! assert_approx_eq {
        ($left:expr, $right:expr, $tolerance:expr) => {
            let left = $left;
            let right = $right;
            let tolerance = $tolerance;
            let diff = (left - right).abs();
            if diff >= tolerance {
                panic!(
                    "assertion failed: values are not approximately equal\n  left: {}\n  right: {}\n  difference: {}\n  tolerance: {}",
                    left, right, diff, tolerance
                );
            }
        };
        ($left:expr, $right:expr) => {
            assert_approx_eq!($left, $right, 1e-10);
        };
    }

    fn ad9914() -> DeviceProfile {
        DeviceProfile::for_device(DeviceKind::Ad9914, hertz(3.5e9)).unwrap()
    }

    fn word(value: u64, width: usize) -> Vec<u8> {
        let mut image = vec![0u8; width - 8];
        image.extend_from_slice(&value.to_be_bytes());
        image
    }

    #[test]
    fn test_ftw_to_frequency() {
        let frequency = ad9914().ftw_to_frequency(word(4096, 32)).unwrap();
        assert_eq!(frequency, 3337.860107421875);
    }

    #[test]
    fn test_frequency_to_ftw() {
        let ftw = ad9914().frequency_to_ftw(3337.860107421875).unwrap();
        assert_eq!(ftw, word(4096, 32));
    }

    #[test]
    fn test_pow_to_phase() {
        let phase = ad9914().pow_to_phase(word(16384, 16)).unwrap();
        assert_eq!(phase, FRAC_PI_2);
    }

    #[test]
    fn test_phase_to_pow() {
        let pow = ad9914().phase_to_pow(FRAC_PI_2).unwrap();
        assert_eq!(pow, word(16384, 16));
    }

    #[test]
    fn test_amplitude_to_asf() {
        // round(10^(-3/20) * 2^12) == 2900
        let asf = ad9914().amplitude_to_asf(-3.0).unwrap();
        assert_eq!(asf, word(2900, 12));
    }

    #[test]
    fn test_asf_to_amplitude() {
        let amplitude = ad9914().asf_to_amplitude(word(2900, 12)).unwrap();
        assert_approx_eq!(amplitude, -3.0, 1e-3);
    }

    #[test]
    fn test_byte_inputs_decode_as_physical_quantities() {
        // Byte input to a to-word conversion is decoded as the physical
        // quantity, never taken as an already-encoded word.
        let ftw = ad9914().frequency_to_ftw(4096.0).unwrap();
        assert_eq!(ftw, word(5026, 32));
        assert_eq!(ad9914().frequency_to_ftw(word(4096, 32)).unwrap(), ftw);
        assert_eq!(ad9914().frequency_to_ftw(vec![0x10, 0x00]).unwrap(), ftw);

        // All-zero bytes of any length are 0 Hz.
        assert_eq!(ad9914().frequency_to_ftw(vec![0u8; 4]).unwrap(), word(0, 32));
    }

    #[test]
    fn test_integer_inputs() {
        assert_eq!(ad9914().frequency_to_ftw(0u32).unwrap(), vec![0u8; 32]);
        assert_eq!(ad9914().pow_to_phase(16384u32).unwrap(), FRAC_PI_2);
    }

    #[test]
    fn test_frequencies_outside_the_register_domain() {
        assert!(matches!(
            ad9914().frequency_to_ftw(-1.0),
            Err(Error::EncodingOverflow { .. })
        ));
        assert!(matches!(
            ad9914().frequency_to_ftw(3.5e9),
            Err(Error::EncodingOverflow { .. })
        ));
        assert!(matches!(
            ad9914().frequency_to_ftw(f64::NAN),
            Err(Error::InvalidValueType(_))
        ));
    }

    #[test]
    fn test_nyquist_violations_still_encode() {
        // 2 GHz on a 3.5 GHz clock aliases but is a valid register setting
        let ftw = ad9914().frequency_to_ftw(2e9).unwrap();
        assert_approx_eq!(ad9914().ftw_to_frequency(ftw).unwrap(), 2e9, 1.0);
    }

    #[test]
    fn test_phases_outside_one_turn() {
        assert!(matches!(
            ad9914().phase_to_pow(TAU),
            Err(Error::EncodingOverflow { .. })
        ));
        assert!(matches!(
            ad9914().phase_to_pow(-0.1),
            Err(Error::EncodingOverflow { .. })
        ));
    }

    #[test]
    fn test_full_scale_amplitude_overflows() {
        // 10^(0/20) * 2^12 == 2^12, one past the largest code
        assert!(matches!(
            ad9914().amplitude_to_asf(0.0),
            Err(Error::EncodingOverflow { .. })
        ));
    }

    #[test]
    fn test_zero_asf_decodes_to_minus_infinity() {
        let amplitude = ad9914().asf_to_amplitude(0u32).unwrap();
        assert_eq!(amplitude, f64::NEG_INFINITY);
    }

    proptest! {
        #[test]
        fn frequency_roundtrip_stays_within_one_step(frequency in 0.0..3_499_999_999.0f64) {
            let profile = ad9914();
            let step = 3.5e9 / 2f64.powi(32);
            let ftw = profile.frequency_to_ftw(frequency).unwrap();
            let back = profile.ftw_to_frequency(ftw).unwrap();
            prop_assert!((back - frequency).abs() <= step);
        }

        #[test]
        fn phase_roundtrip_stays_within_one_step(phase in 0.0..(TAU - 1e-3)) {
            let profile = ad9914();
            let step = TAU / 2f64.powi(16);
            let pow = profile.phase_to_pow(phase).unwrap();
            let back = profile.pow_to_phase(pow).unwrap();
            prop_assert!((back - phase).abs() <= step);
        }

        #[test]
        fn amplitude_roundtrip_stays_within_half_a_code(amplitude in -60.0..-0.01f64) {
            let profile = ad9914();
            let code = |db: f64| 10f64.powf(db / 20.0) * 2f64.powi(12);
            let asf = profile.amplitude_to_asf(amplitude).unwrap();
            let back = profile.asf_to_amplitude(asf).unwrap();
            prop_assert!((code(back) - code(amplitude)).abs() <= 0.5 + 1e-6);
        }
    }
}
