// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use num_traits::{AsPrimitive, Float};
use std::fmt::Result as FormatterResult;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Add, Div, Mul, Sub};

/// A frequency represented with unit type.
///
/// # Type Parameter
/// - `T`: The underlying value (typically a floating point number)
/// - `U`: The unit of the value (should be a zero-sized type)
///
/// # Examples
/// ```rust
/// use dds_units::frequency::hertz;
///
/// let sysclk = hertz(1e9); // Create a frequency of 1 GHz
/// ```
#[derive(Clone, Copy)]
pub struct Frequency<U, T = f64> {
    value: T,
    unit: U,
}

impl<U, T> Frequency<U, T> {
    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Float, U> PartialEq for Frequency<U, T> {
    fn eq(&self, other: &Self) -> bool {
        let a = self.value;
        let b = other.value;
        if a.is_zero() && b.is_zero() {
            true
        } else {
            a == b
        }
    }
}

impl<T: Float, U> Eq for Frequency<U, T> {}

impl<T: Float, U> PartialOrd for Frequency<U, T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Float, U> Ord for Frequency<U, T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.value < other.value {
            std::cmp::Ordering::Less
        } else if self.value > other.value {
            std::cmp::Ordering::Greater
        } else {
            std::cmp::Ordering::Equal
        }
    }
}

impl<T: Debug, U> Debug for Frequency<U, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatterResult {
        f.debug_struct("Frequency")
            .field("value", &self.value)
            .field("unit", &std::any::type_name::<U>())
            .finish()
    }
}

impl<T, U> Add for Frequency<U, T>
where
    T: Add<Output = T> + Copy,
    U: Copy,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Frequency {
            value: self.value + rhs.value,
            unit: self.unit,
        }
    }
}

impl<U, T> Sub for Frequency<U, T>
where
    T: Sub<Output = T> + Copy,
    U: Copy,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Frequency {
            value: self.value - rhs.value,
            unit: self.unit,
        }
    }
}

impl<U, T> Mul<T> for Frequency<U, T>
where
    T: Mul<T, Output = T> + Copy,
    U: Copy,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Frequency {
            value: self.value * rhs,
            unit: self.unit,
        }
    }
}

impl<U, T> Div<T> for Frequency<U, T>
where
    T: Div<T, Output = T> + Copy,
    U: Copy,
{
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Frequency {
            value: self.value / rhs,
            unit: self.unit,
        }
    }
}

fn round_to_significant_digits(x: f64, n: u32) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        let order = x.abs().log10().floor();
        let scale = 10f64.powf((n as f64) - 1.0 - order);
        (x * scale).round() / scale
    }
}

impl<U, T> Display for Frequency<U, T>
where
    T: Display + Debug + AsPrimitive<f64> + Float,
    U: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            Display::fmt(&self.value, f)?;
        } else {
            // For floats, the debug representation is generally preferable.
            // It automatically chooses precision and enables scientific notation when appropriate.
            // We make this the default.

            // We also round to a number of significand digits slightly below that of epsilon.
            // It avoids ugly numbers in presence of rounding errors, and no one wants to read
            // that many digits anyway.

            let significand_digits = (-T::epsilon().log10() - T::one()).as_() as u32;
            let value = round_to_significant_digits(self.value.as_(), significand_digits);

            Debug::fmt(&value, f)?;
        }
        write!(f, " ")?;
        self.unit.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hertz;

impl Display for Hertz {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatterResult {
        write!(f, "Hz")
    }
}

impl<T: Float, U: Default> From<T> for Frequency<U, T> {
    fn from(value: T) -> Self {
        Frequency {
            value,
            unit: U::default(),
        }
    }
}

impl<U> From<Frequency<U, f64>> for f64 {
    fn from(frequency: Frequency<U, f64>) -> Self {
        frequency.value
    }
}

impl<U> From<Frequency<U, f32>> for f32 {
    fn from(frequency: Frequency<U, f32>) -> Self {
        frequency.value
    }
}

pub const fn hertz<T>(value: T) -> Frequency<Hertz, T> {
    Frequency {
        value,
        unit: Hertz,
    }
}
