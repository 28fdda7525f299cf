// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

//! Driver core for Direct Digital Synthesis (DDS) frequency generator
//! chips: conversions between physical quantities and the fixed-width
//! tuning words the chips consume, validated per-device conversion
//! profiles, and the register-transport seam the device control surface is
//! built on.

mod codec;
pub mod connector;
pub mod device;
pub mod device_traits;
pub mod error;
pub mod profile;
pub mod value;

pub use connector::Connector;
pub use device::{DdsDevice, PllConfig, ToneProfile};
pub use device_traits::{DeviceKind, DeviceTraits};
pub use error::{Error, Result};
pub use profile::{DeviceProfile, WordKind, WordWidths};
pub use value::{MAX_WORD_WIDTH, Value};
