// Copyright 2026 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

//! Unit-tagged physical quantities used across the DDS crates.

pub mod frequency;
