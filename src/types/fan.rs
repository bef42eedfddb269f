// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan state enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether the fan is currently running.
///
/// The device reports fan state as a numeric code where `"2"` means
/// running; every other value reads as not running. This is a
/// two-valued textual enumeration (`"On"`/`"Off"`), not a boolean,
/// matching the shape host applications already consume.
///
/// # Examples
///
/// ```
/// use proliphix_lib::FanState;
///
/// assert_eq!(FanState::from_raw("2"), FanState::On);
/// assert_eq!(FanState::from_raw("1"), FanState::Off);
/// assert_eq!(FanState::On.as_str(), "On");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FanState {
    /// Fan is running.
    On,
    /// Fan is idle.
    Off,
}

impl FanState {
    /// Wire code the device reports while the fan runs.
    const RUNNING_CODE: &'static str = "2";

    /// Interprets a raw wire value.
    ///
    /// `"2"` is running; anything else, including unknown codes from
    /// newer firmware, reads as [`FanState::Off`].
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        if raw == Self::RUNNING_CODE {
            Self::On
        } else {
            Self::Off
        }
    }

    /// Returns the textual form, `"On"` or `"Off"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "On",
            Self::Off => "Off",
        }
    }
}

impl fmt::Display for FanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_code_is_on() {
        assert_eq!(FanState::from_raw("2"), FanState::On);
    }

    #[test]
    fn everything_else_is_off() {
        assert_eq!(FanState::from_raw("1"), FanState::Off);
        assert_eq!(FanState::from_raw("0"), FanState::Off);
        assert_eq!(FanState::from_raw(""), FanState::Off);
        assert_eq!(FanState::from_raw("7"), FanState::Off);
        assert_eq!(FanState::from_raw("on"), FanState::Off);
    }

    #[test]
    fn textual_form() {
        assert_eq!(FanState::On.as_str(), "On");
        assert_eq!(FanState::Off.as_str(), "Off");
        assert_eq!(FanState::On.to_string(), "On");
    }
}
