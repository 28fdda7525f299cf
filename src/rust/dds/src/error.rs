// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;

use crate::profile::WordKind;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A numeric input is not a finite number.
    #[error("value has to be a finite number, got {0}")]
    InvalidValueType(f64),
    /// A tuning word width lies outside the supported range of
    /// 1..=[`MAX_WORD_WIDTH`](crate::value::MAX_WORD_WIDTH) bits.
    #[error("tuning word width has to be within 1..=64 bits, got {0}")]
    InvalidWidth(u32),
    /// An already encoded buffer does not have the length the target word
    /// requires. Buffers are never truncated or padded to fit.
    #[error("width of value does not match target width: expected {expected} bytes, got {actual}")]
    WidthMismatch { expected: usize, actual: usize },
    /// The value rounds to an integer outside the register domain of the
    /// target word.
    #[error("value {value} does not fit into {width} bits")]
    EncodingOverflow { value: f64, width: u32 },
    #[error("tuning word width for {0} has to be set")]
    MissingWidthConfiguration(WordKind),
    #[error("sysclk frequency has to be a finite positive value within the device rating, got {0} Hz")]
    InvalidClockType(f64),
    /// A declared device operation whose register sequence is not wired up.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

impl Error {
    /// Wraps an arbitrary transport failure, for [`Connector`](crate::Connector)
    /// implementations without their own error type.
    pub fn transport<T>(msg: T) -> Self
    where
        T: Display,
    {
        Error::Transport(anyhow::anyhow!(msg.to_string()))
    }
}
