// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level thermostat proxy.
//!
//! [`Thermostat`] translates between symbolic field names and the
//! device's OID namespace, caching the most recently fetched raw
//! values. Reads come from the cache only; [`Thermostat::refresh`] is
//! the single operation that talks to the read endpoint, and setters
//! are the single operations that talk to the write endpoint.
//!
//! # Reading state
//!
//! ```no_run
//! use proliphix_lib::Thermostat;
//!
//! # async fn example() -> proliphix_lib::Result<()> {
//! let mut thermostat = Thermostat::http("192.168.1.50")
//!     .with_credentials("admin", "password")
//!     .build()?;
//!
//! thermostat.refresh().await?;
//! println!(
//!     "{} is at {}",
//!     thermostat.device_name()?,
//!     thermostat.current_temperature()?
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Writing setpoints
//!
//! ```no_run
//! use proliphix_lib::{Temperature, Thermostat};
//!
//! # async fn example() -> proliphix_lib::Result<()> {
//! # let mut thermostat = Thermostat::http("192.168.1.50").build()?;
//! thermostat
//!     .set_setback_heat(Temperature::from_degrees(68.0))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod http_builder;

pub use http_builder::ThermostatBuilder;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::error::{DeviceError, Error, ParseError, Result};
use crate::oid::{self, Oid};
use crate::protocol::Protocol;
use crate::state::ThermostatState;
use crate::types::{FanState, HvacMode, HvacState, Temperature};

/// Trailing marker the write endpoint expects on every form body.
const SUBMIT_TOKEN: &str = "submit=Submit";

/// Proxy for a single Proliphix thermostat.
///
/// Holds the transport and a cache of the most recently fetched raw
/// field values. The cache starts empty and is populated wholesale by
/// [`refresh`](Self::refresh); accessors read only from the cache and
/// never trigger network I/O. This split exists because the device
/// manual advises against querying more often than once a minute over
/// sustained periods, so the polling cadence stays in the caller's
/// hands.
///
/// Mutating operations take `&mut self`; hosts with concurrent callers
/// must route them through a single owner.
#[derive(Debug)]
pub struct Thermostat<P: Protocol> {
    protocol: P,
    cache: HashMap<Oid, String>,
}

impl<P: Protocol> Thermostat<P> {
    /// Creates a thermostat proxy over an existing transport.
    ///
    /// Most callers want [`Thermostat::http`] instead.
    pub fn new(protocol: P) -> Self {
        Self {
            protocol,
            cache: HashMap::new(),
        }
    }

    // ========== Bulk read ==========

    /// Fetches every modeled field from the device and refills the
    /// cache.
    ///
    /// Issues one POST to the read endpoint. Response tokens with an
    /// unrecognized identifier are ignored so newer firmware can expose
    /// extra fields; tokens that don't split into a key and a value are
    /// skipped without touching already-cached fields.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails; the cache keeps its previous
    /// contents in that case.
    pub async fn refresh(&mut self) -> Result<()> {
        let body = self.protocol.fetch(&oid::bulk_query()).await?;
        self.cache_response(&body);
        tracing::debug!(fields = self.cache.len(), "Refreshed thermostat state");
        Ok(())
    }

    /// Merges a read-endpoint response body into the cache.
    fn cache_response(&mut self, body: &str) {
        for token in body.split('&') {
            if token.is_empty() {
                continue;
            }
            let Some((key, value)) = token.split_once('=') else {
                tracing::debug!(token = %token, "Skipping malformed response token");
                continue;
            };
            let Some(id) = key.strip_prefix("OID") else {
                tracing::debug!(key = %key, "Skipping response key without OID prefix");
                continue;
            };
            if let Some(oid) = Oid::from_id(id) {
                self.cache.insert(oid, value.to_string());
            }
        }
    }

    // ========== Cache access ==========

    /// Returns the raw cached string for a field, if any.
    ///
    /// No type coercion is applied; this is the value exactly as the
    /// device sent it.
    #[must_use]
    pub fn raw_value(&self, oid: Oid) -> Option<&str> {
        self.cache.get(&oid).map(String::as_str)
    }

    /// Returns a lenient snapshot of everything currently cached.
    ///
    /// Fields that were never fetched, or whose raw value does not
    /// parse, come back as `None` instead of an error.
    #[must_use]
    pub fn state(&self) -> ThermostatState {
        ThermostatState {
            device_name: self.device_name().ok().map(str::to_string),
            current_temperature: self.current_temperature().ok(),
            setback_heat: self.setback_heat().ok(),
            setback_cool: self.setback_cool().ok(),
            hvac_mode: self.hvac_mode().ok(),
            hvac_state: self.hvac_state().ok(),
            fan_state: self.fan_state().ok(),
            current_class: self.current_class().ok(),
            heat_usage: self.heat_usage().ok(),
            cool_usage: self.cool_usage().ok(),
            fan_usage: self.fan_usage().ok(),
            last_usage_reset: self.last_usage_reset().ok(),
        }
    }

    fn raw(&self, oid: Oid) -> Result<&str> {
        self.raw_value(oid).ok_or_else(|| {
            Error::Device(DeviceError::FieldNotCached {
                field: oid.name().to_string(),
            })
        })
    }

    fn parsed<T>(&self, oid: Oid) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let raw = self.raw(oid)?;
        raw.parse().map_err(|err: T::Err| {
            Error::Parse(ParseError::InvalidValue {
                field: oid.name().to_string(),
                message: err.to_string(),
            })
        })
    }

    fn decidegrees(&self, oid: Oid) -> Result<Temperature> {
        self.parsed::<i64>(oid).map(Temperature::from_decidegrees)
    }

    // ========== Field accessors ==========

    /// Returns the device name.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::FieldNotCached`] before the first
    /// successful refresh.
    pub fn device_name(&self) -> Result<&str> {
        self.raw(Oid::DevName)
    }

    /// Returns the average measured temperature.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::FieldNotCached`] before the first
    /// successful refresh.
    pub fn current_temperature(&self) -> Result<Temperature> {
        self.decidegrees(Oid::AverageTemp)
    }

    /// Returns the heating setback setpoint.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::FieldNotCached`] before the first
    /// successful refresh.
    pub fn setback_heat(&self) -> Result<Temperature> {
        self.decidegrees(Oid::SetbackHeat)
    }

    /// Returns the cooling setback setpoint.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::FieldNotCached`] before the first
    /// successful refresh.
    pub fn setback_cool(&self) -> Result<Temperature> {
        self.decidegrees(Oid::SetbackCool)
    }

    /// Returns the configured HVAC operating mode.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::FieldNotCached`] before the first
    /// successful refresh, or a value error for an unknown mode code.
    pub fn hvac_mode(&self) -> Result<HvacMode> {
        let code: u8 = self.parsed(Oid::HvacMode)?;
        Ok(HvacMode::from_code(code)?)
    }

    /// Returns the live HVAC state.
    ///
    /// The underlying integer code is available as
    /// [`HvacState::code`].
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::FieldNotCached`] before the first
    /// successful refresh, or a value error for an unknown state code.
    pub fn hvac_state(&self) -> Result<HvacState> {
        let code: u8 = self.parsed(Oid::HvacState)?;
        Ok(HvacState::from_code(code)?)
    }

    /// Returns whether the fan is running.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::FieldNotCached`] before the first
    /// successful refresh.
    pub fn fan_state(&self) -> Result<FanState> {
        Ok(FanState::from_raw(self.raw(Oid::FanState)?))
    }

    /// Returns the active schedule class code.
    ///
    /// The class enumeration differs between firmware lines, so the
    /// raw code is exposed without interpretation.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::FieldNotCached`] before the first
    /// successful refresh.
    pub fn current_class(&self) -> Result<u8> {
        self.parsed(Oid::CurrentClass)
    }

    /// Returns heat stage 1 runtime since the last usage reset.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::FieldNotCached`] before the first
    /// successful refresh.
    pub fn heat_usage(&self) -> Result<Duration> {
        self.parsed(Oid::Heat1Usage).map(Duration::from_secs)
    }

    /// Returns cool stage 1 runtime since the last usage reset.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::FieldNotCached`] before the first
    /// successful refresh.
    pub fn cool_usage(&self) -> Result<Duration> {
        self.parsed(Oid::Cool1Usage).map(Duration::from_secs)
    }

    /// Returns fan runtime since the last usage reset.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::FieldNotCached`] before the first
    /// successful refresh.
    pub fn fan_usage(&self) -> Result<Duration> {
        self.parsed(Oid::FanUsage).map(Duration::from_secs)
    }

    /// Returns the time of the last usage counter reset.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::FieldNotCached`] before the first
    /// successful refresh.
    pub fn last_usage_reset(&self) -> Result<DateTime<Utc>> {
        let secs: i64 = self.parsed(Oid::LastUsageReset)?;
        DateTime::from_timestamp(secs, 0).ok_or_else(|| {
            Error::Parse(ParseError::InvalidValue {
                field: Oid::LastUsageReset.name().to_string(),
                message: format!("timestamp {secs} is out of range"),
            })
        })
    }

    // ========== Setters ==========

    /// Sets the heating setback setpoint.
    ///
    /// Converts to deci-degrees (truncating toward zero), stores the
    /// wire value into the cache, then writes the field. The caller is
    /// responsible for a later [`refresh`](Self::refresh) if it wants
    /// the device's own view back.
    ///
    /// # Errors
    ///
    /// Returns error if the write request fails.
    pub async fn set_setback_heat(&mut self, temperature: Temperature) -> Result<()> {
        self.write_setpoint(Oid::SetbackHeat, temperature).await
    }

    /// Sets the cooling setback setpoint.
    ///
    /// Same derivation as [`set_setback_heat`](Self::set_setback_heat).
    ///
    /// # Errors
    ///
    /// Returns error if the write request fails.
    pub async fn set_setback_cool(&mut self, temperature: Temperature) -> Result<()> {
        self.write_setpoint(Oid::SetbackCool, temperature).await
    }

    async fn write_setpoint(&mut self, oid: Oid, temperature: Temperature) -> Result<()> {
        let deci = temperature.to_decidegrees().to_string();
        self.cache.insert(oid, deci.clone());
        self.write_fields(&[(oid, deci)]).await
    }

    /// Sets the HVAC operating mode.
    ///
    /// # Errors
    ///
    /// Returns error if the write request fails.
    pub async fn set_hvac_mode(&mut self, mode: HvacMode) -> Result<()> {
        let code = mode.code().to_string();
        self.cache.insert(Oid::HvacMode, code.clone());
        self.write_fields(&[(Oid::HvacMode, code)]).await
    }

    // ========== Raw field writes ==========

    /// Writes raw values to named fields in a single request.
    ///
    /// Field names that don't resolve in the OID table are dropped
    /// silently, so callers can pass through fields this library
    /// doesn't model yet. The write is fire-and-forget: the cache is
    /// not updated and the device's response is discarded.
    ///
    /// # Errors
    ///
    /// Returns error if the write request fails.
    pub async fn set_fields(&self, pairs: &[(&str, &str)]) -> Result<()> {
        let fields: Vec<(Oid, String)> = pairs
            .iter()
            .filter_map(|(name, value)| match Oid::from_name(name) {
                Some(oid) => Some((oid, (*value).to_string())),
                None => {
                    tracing::debug!(field = %name, "Dropping unknown field name");
                    None
                }
            })
            .collect();
        self.write_fields(&fields).await
    }

    /// Writes raw values to named fields, rejecting unknown names.
    ///
    /// Unlike [`set_fields`](Self::set_fields), an unresolvable name
    /// fails the whole call before anything is posted to the device.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UnknownField`] for the first name outside
    /// the OID table, or error if the write request fails.
    pub async fn set_fields_strict(&self, pairs: &[(&str, &str)]) -> Result<()> {
        for (name, _) in pairs {
            if Oid::from_name(name).is_none() {
                return Err(Error::Device(DeviceError::UnknownField {
                    field: (*name).to_string(),
                }));
            }
        }
        self.set_fields(pairs).await
    }

    async fn write_fields(&self, fields: &[(Oid, String)]) -> Result<()> {
        let mut tokens: Vec<String> = fields
            .iter()
            .map(|(oid, value)| format!("OID{}={}", oid.id(), urlencoding::encode(value)))
            .collect();
        tokens.push(SUBMIT_TOKEN.to_string());
        self.protocol.submit(&tokens.join("&")).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::HttpClient;

    fn thermostat() -> Thermostat<HttpClient> {
        Thermostat::new(HttpClient::new("127.0.0.1").unwrap())
    }

    #[test]
    fn accessor_before_refresh_is_not_cached() {
        let thermostat = thermostat();
        let err = thermostat.current_temperature().unwrap_err();
        assert!(matches!(
            err,
            Error::Device(DeviceError::FieldNotCached { field }) if field == "AverageTemp"
        ));
    }

    #[test]
    fn cache_response_populates_fields() {
        let mut thermostat = thermostat();
        thermostat.cache_response("OID1.2=Kitchen&OID4.1.13=712");

        assert_eq!(thermostat.device_name().unwrap(), "Kitchen");
        let temp = thermostat.current_temperature().unwrap();
        assert!((temp.degrees() - 71.2).abs() < f64::EPSILON);
    }

    #[test]
    fn cache_response_overwrites_prior_values() {
        let mut thermostat = thermostat();
        thermostat.cache_response("OID4.1.13=712");
        thermostat.cache_response("OID4.1.13=698");

        let temp = thermostat.current_temperature().unwrap();
        assert!((temp.degrees() - 69.8).abs() < f64::EPSILON);
    }

    #[test]
    fn cache_response_ignores_unknown_identifiers() {
        let mut thermostat = thermostat();
        thermostat.cache_response("OID9.9.9=1&OID1.2=Loft");

        assert_eq!(thermostat.device_name().unwrap(), "Loft");
        assert_eq!(thermostat.cache.len(), 1);
    }

    #[test]
    fn cache_response_skips_malformed_tokens() {
        let mut thermostat = thermostat();
        thermostat.cache_response("OID1.2=Den");
        thermostat.cache_response("garbage&OID4.1.2=3&");

        // The malformed token neither aborts parsing nor disturbs
        // fields cached earlier.
        assert_eq!(thermostat.device_name().unwrap(), "Den");
        assert_eq!(thermostat.hvac_state().unwrap(), HvacState::Heat);
    }

    #[test]
    fn cache_response_requires_oid_prefix() {
        let mut thermostat = thermostat();
        thermostat.cache_response("1.2=Bare");

        assert!(thermostat.device_name().is_err());
    }

    #[test]
    fn hvac_state_parses_enumeration_code() {
        let mut thermostat = thermostat();
        thermostat.cache_response("OID4.1.2=3");

        let state = thermostat.hvac_state().unwrap();
        assert_eq!(state, HvacState::Heat);
        assert_eq!(state.code(), 3);
    }

    #[test]
    fn hvac_state_rejects_non_integer() {
        let mut thermostat = thermostat();
        thermostat.cache_response("OID4.1.2=warm");

        assert!(matches!(
            thermostat.hvac_state().unwrap_err(),
            Error::Parse(ParseError::InvalidValue { field, .. }) if field == "HvacState"
        ));
    }

    #[test]
    fn fan_state_running_code() {
        let mut thermostat = thermostat();
        thermostat.cache_response("OID4.1.4=2");
        assert_eq!(thermostat.fan_state().unwrap(), FanState::On);

        thermostat.cache_response("OID4.1.4=1");
        assert_eq!(thermostat.fan_state().unwrap(), FanState::Off);
    }

    #[test]
    fn usage_counters_parse_as_durations() {
        let mut thermostat = thermostat();
        thermostat.cache_response("OID4.5.1=5400&OID4.5.3=0&OID4.5.5=7265");

        assert_eq!(thermostat.heat_usage().unwrap(), Duration::from_secs(5400));
        assert_eq!(thermostat.cool_usage().unwrap(), Duration::from_secs(0));
        assert_eq!(thermostat.fan_usage().unwrap(), Duration::from_secs(7265));
    }

    #[test]
    fn last_usage_reset_parses_epoch() {
        let mut thermostat = thermostat();
        thermostat.cache_response("OID4.5.6=1461110400");

        let reset = thermostat.last_usage_reset().unwrap();
        assert_eq!(reset, DateTime::from_timestamp(1_461_110_400, 0).unwrap());
    }

    #[test]
    fn raw_value_is_uncoerced() {
        let mut thermostat = thermostat();
        thermostat.cache_response("OID4.1.13=712");

        assert_eq!(thermostat.raw_value(Oid::AverageTemp), Some("712"));
        assert_eq!(thermostat.raw_value(Oid::DevName), None);
    }

    #[test]
    fn snapshot_of_empty_cache_is_all_none() {
        let thermostat = thermostat();
        let state = thermostat.state();
        assert!(state.device_name.is_none());
        assert!(state.current_temperature.is_none());
        assert!(state.last_usage_reset.is_none());
    }

    #[test]
    fn snapshot_reflects_cache() {
        let mut thermostat = thermostat();
        thermostat.cache_response("OID1.2=Hall&OID4.1.13=712&OID4.1.4=2&OID4.1.2=3&OID4.1.1=2");

        let state = thermostat.state();
        assert_eq!(state.device_name.as_deref(), Some("Hall"));
        assert_eq!(state.fan_state, Some(FanState::On));
        assert_eq!(state.hvac_state, Some(HvacState::Heat));
        assert_eq!(state.hvac_mode, Some(HvacMode::Heat));
        assert!(state.setback_heat.is_none());
    }
}
