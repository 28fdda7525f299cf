// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use crate::error::{Error, Result};

/// Largest supported tuning word width in bits. Word arithmetic is carried
/// in `u64`.
pub const MAX_WORD_WIDTH: u32 = u64::BITS;

/// 2^width, the number of codes a `width` bit tuning word can hold.
pub(crate) fn modulus(width: u32) -> f64 {
    f64::from(width).exp2()
}

/// A conversion input: either a physical quantity or a tuning word that is
/// already encoded as a register image.
///
/// Every conversion normalizes its argument through this type, so callers
/// can hand over plain numbers as well as raw big-endian buffers read back
/// from a device.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(u64),
    Float(f64),
    Bytes(Vec<u8>),
}

impl Value {
    /// Folds the value into a plain number. Byte buffers decode as
    /// big-endian unsigned integers.
    ///
    /// Fails with [`Error::InvalidValueType`] if the number is not finite.
    pub fn as_number(&self) -> Result<f64> {
        match self {
            Value::Int(value) => Ok(*value as f64),
            Value::Float(value) if value.is_finite() => Ok(*value),
            Value::Float(value) => Err(Error::InvalidValueType(*value)),
            Value::Bytes(bytes) => Ok(bytes
                .iter()
                .fold(0.0, |acc, &byte| acc.mul_add(256.0, f64::from(byte)))),
        }
    }

    /// Encodes the value as a big-endian register image of `width` bytes.
    ///
    /// Numbers are rounded to the nearest integer (ties away from zero) and
    /// have to fit into `width` bits; anything negative or >= 2^width fails
    /// with [`Error::EncodingOverflow`]. A buffer that is already encoded
    /// passes through untouched if its length matches the width, else the
    /// call fails with [`Error::WidthMismatch`].
    pub fn into_bytes(self, width: u32) -> Result<Vec<u8>> {
        if !(1..=MAX_WORD_WIDTH).contains(&width) {
            return Err(Error::InvalidWidth(width));
        }
        match self {
            Value::Bytes(bytes) => {
                if bytes.len() == width as usize {
                    Ok(bytes)
                } else {
                    Err(Error::WidthMismatch {
                        expected: width as usize,
                        actual: bytes.len(),
                    })
                }
            }
            Value::Int(value) => encode_be(value, width),
            Value::Float(value) => {
                if value.is_nan() {
                    return Err(Error::InvalidValueType(value));
                }
                let rounded = value.round();
                if !(0.0..modulus(width)).contains(&rounded) {
                    return Err(Error::EncodingOverflow {
                        value: rounded,
                        width,
                    });
                }
                encode_be(rounded as u64, width)
            }
        }
    }
}

fn encode_be(value: u64, width: u32) -> Result<Vec<u8>> {
    if width < u64::BITS && (value >> width) != 0 {
        return Err(Error::EncodingOverflow {
            value: value as f64,
            width,
        });
    }
    let be = value.to_be_bytes();
    if width as usize >= be.len() {
        let mut image = vec![0u8; width as usize - be.len()];
        image.extend_from_slice(&be);
        Ok(image)
    } else {
        // The value fits into `width` bits, so the dropped lead bytes are zero.
        Ok(be[be.len() - width as usize..].to_vec())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}
