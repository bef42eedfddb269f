// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HVAC mode and state enumerations.
//!
//! The thermostat reports both the configured operating mode and the
//! live state machine position as small integer codes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Configured HVAC operating mode.
///
/// # Examples
///
/// ```
/// use proliphix_lib::HvacMode;
///
/// let mode = HvacMode::from_code(2).unwrap();
/// assert_eq!(mode, HvacMode::Heat);
/// assert_eq!(mode.code(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HvacMode {
    /// System disabled.
    Off,
    /// Heating only.
    Heat,
    /// Cooling only.
    Cool,
    /// Automatic changeover between heating and cooling.
    Auto,
}

impl HvacMode {
    /// Returns the numeric code used on the wire.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Off => 1,
            Self::Heat => 2,
            Self::Cool => 3,
            Self::Auto => 4,
        }
    }

    /// Creates a mode from its wire code.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHvacMode` for codes outside 1-4.
    pub const fn from_code(code: u8) -> Result<Self, ValueError> {
        match code {
            1 => Ok(Self::Off),
            2 => Ok(Self::Heat),
            3 => Ok(Self::Cool),
            4 => Ok(Self::Auto),
            other => Err(ValueError::InvalidHvacMode(other)),
        }
    }

    /// Returns a human-readable name for this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Heat => "Heat",
            Self::Cool => "Cool",
            Self::Auto => "Auto",
        }
    }
}

impl fmt::Display for HvacMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Live HVAC state machine position.
///
/// Unlike [`HvacMode`], which is what the user configured, this is
/// what the equipment is doing right now.
///
/// # Examples
///
/// ```
/// use proliphix_lib::HvacState;
///
/// let state = HvacState::from_code(3).unwrap();
/// assert_eq!(state, HvacState::Heat);
/// assert_eq!(state.code(), 3);
/// assert!(state.is_heating());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HvacState {
    /// Device is starting up.
    Initializing,
    /// No stage active.
    Off,
    /// Heat stage 1 active.
    Heat,
    /// Heat stage 2 active.
    Heat2,
    /// Heat stage 3 active.
    Heat3,
    /// Cool stage 1 active.
    Cool,
    /// Cool stage 2 active.
    Cool2,
    /// Inter-stage delay.
    Delay,
    /// Relays are being reset.
    ResetRelays,
}

impl HvacState {
    /// Returns the numeric code used on the wire.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Initializing => 1,
            Self::Off => 2,
            Self::Heat => 3,
            Self::Heat2 => 4,
            Self::Heat3 => 5,
            Self::Cool => 6,
            Self::Cool2 => 7,
            Self::Delay => 8,
            Self::ResetRelays => 9,
        }
    }

    /// Creates a state from its wire code.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHvacState` for codes outside 1-9.
    pub const fn from_code(code: u8) -> Result<Self, ValueError> {
        match code {
            1 => Ok(Self::Initializing),
            2 => Ok(Self::Off),
            3 => Ok(Self::Heat),
            4 => Ok(Self::Heat2),
            5 => Ok(Self::Heat3),
            6 => Ok(Self::Cool),
            7 => Ok(Self::Cool2),
            8 => Ok(Self::Delay),
            9 => Ok(Self::ResetRelays),
            other => Err(ValueError::InvalidHvacState(other)),
        }
    }

    /// Returns true while any heat stage is active.
    #[must_use]
    pub const fn is_heating(&self) -> bool {
        matches!(self, Self::Heat | Self::Heat2 | Self::Heat3)
    }

    /// Returns true while any cool stage is active.
    #[must_use]
    pub const fn is_cooling(&self) -> bool {
        matches!(self, Self::Cool | Self::Cool2)
    }
}

impl fmt::Display for HvacState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Initializing => "Initializing",
            Self::Off => "Off",
            Self::Heat => "Heat",
            Self::Heat2 => "Heat2",
            Self::Heat3 => "Heat3",
            Self::Cool => "Cool",
            Self::Cool2 => "Cool2",
            Self::Delay => "Delay",
            Self::ResetRelays => "ResetRelays",
        };
        write!(f, "{name}")
    }
}
