// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for thermostat state.
//!
//! This module provides typed representations of the values the device
//! transmits as raw strings. Temperatures carry the deci-degree wire
//! conversion; the HVAC and fan enumerations carry the firmware's
//! numeric codes.
//!
//! # Types
//!
//! - [`Temperature`] - degree value transmitted as deci-degrees
//! - [`HvacMode`] - operating mode (off/heat/cool/auto)
//! - [`HvacState`] - HVAC state machine position
//! - [`FanState`] - fan running state (`"On"`/`"Off"`)

mod fan;
mod hvac;
mod temperature;

pub use fan::FanState;
pub use hvac::{HvacMode, HvacState};
pub use temperature::Temperature;
