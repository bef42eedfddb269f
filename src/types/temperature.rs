// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature type carrying the deci-degree wire conversion.
//!
//! The thermostat transmits every temperature as an integer number of
//! tenths of a degree, so the wire value stays integer-only. This
//! module owns the conversion in both directions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A temperature in degrees.
///
/// The device reports and accepts temperatures as deci-degrees
/// (tenths of a degree, integer). Degree values on the wire are
/// produced with [`to_decidegrees`](Self::to_decidegrees), which
/// truncates toward zero exactly like the device expects.
///
/// # Examples
///
/// ```
/// use proliphix_lib::Temperature;
///
/// let temp = Temperature::from_decidegrees(712);
/// assert!((temp.degrees() - 71.2).abs() < f64::EPSILON);
///
/// let setpoint = Temperature::from_degrees(68.3);
/// assert_eq!(setpoint.to_decidegrees(), 683);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Temperature(f64);

impl Temperature {
    /// Creates a temperature from a degree value.
    #[must_use]
    pub const fn from_degrees(degrees: f64) -> Self {
        Self(degrees)
    }

    /// Creates a temperature from a deci-degree wire value.
    ///
    /// # Examples
    ///
    /// ```
    /// use proliphix_lib::Temperature;
    ///
    /// let temp = Temperature::from_decidegrees(685);
    /// assert!((temp.degrees() - 68.5).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_decidegrees(deci: i64) -> Self {
        Self(deci as f64 / 10.0)
    }

    /// Returns the temperature in degrees.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        self.0
    }

    /// Returns the deci-degree wire value for this temperature.
    ///
    /// Truncates toward zero rather than rounding: 68.05 degrees
    /// becomes 680, not 681. The device protocol relies on this
    /// truncation, so it is pinned by test.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_decidegrees(&self) -> i64 {
        (self.0 * 10.0) as i64
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}\u{b0}", self.0)
    }
}

impl From<f64> for Temperature {
    fn from(degrees: f64) -> Self {
        Self::from_degrees(degrees)
    }
}
