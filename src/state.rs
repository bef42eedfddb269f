// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Snapshot of cached thermostat state.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{FanState, HvacMode, HvacState, Temperature};

/// An owned snapshot of everything a [`Thermostat`] has cached.
///
/// All fields are optional because state is unknown until the device
/// reports it; fields whose raw value failed to parse are also `None`.
/// Use the accessors on [`Thermostat`] when you need a distinguishable
/// error instead of a missing value.
///
/// The snapshot serializes with serde, so hosts can hand it straight
/// to dashboards or automation buses.
///
/// [`Thermostat`]: crate::Thermostat
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThermostatState {
    /// Device name.
    pub device_name: Option<String>,
    /// Average measured temperature.
    pub current_temperature: Option<Temperature>,
    /// Heating setback setpoint.
    pub setback_heat: Option<Temperature>,
    /// Cooling setback setpoint.
    pub setback_cool: Option<Temperature>,
    /// Configured operating mode.
    pub hvac_mode: Option<HvacMode>,
    /// Live HVAC state.
    pub hvac_state: Option<HvacState>,
    /// Fan running state.
    pub fan_state: Option<FanState>,
    /// Active schedule class code.
    pub current_class: Option<u8>,
    /// Heat stage 1 runtime since the last usage reset.
    pub heat_usage: Option<Duration>,
    /// Cool stage 1 runtime since the last usage reset.
    pub cool_usage: Option<Duration>,
    /// Fan runtime since the last usage reset.
    pub fan_usage: Option<Duration>,
    /// Time of the last usage counter reset.
    pub last_usage_reset: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_none() {
        let state = ThermostatState::default();
        assert!(state.device_name.is_none());
        assert!(state.current_temperature.is_none());
        assert!(state.hvac_mode.is_none());
        assert!(state.last_usage_reset.is_none());
    }

    #[test]
    fn serializes_to_json() {
        let state = ThermostatState {
            device_name: Some("Kitchen".to_string()),
            current_temperature: Some(Temperature::from_decidegrees(712)),
            fan_state: Some(FanState::On),
            ..ThermostatState::default()
        };

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["device_name"], "Kitchen");
        assert_eq!(json["fan_state"], "On");
        assert!((json["current_temperature"].as_f64().unwrap() - 71.2).abs() < f64::EPSILON);
    }

    #[test]
    fn json_roundtrip() {
        let state = ThermostatState {
            hvac_mode: Some(HvacMode::Auto),
            hvac_state: Some(HvacState::Cool),
            heat_usage: Some(Duration::from_secs(5400)),
            ..ThermostatState::default()
        };

        let json = serde_json::to_string(&state).unwrap();
        let back: ThermostatState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
