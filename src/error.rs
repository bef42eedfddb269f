// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Proliphix library.
//!
//! This module provides the error hierarchy for handling failures across
//! the library: value validation, protocol communication, response value
//! parsing, and device state access.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when
/// interacting with a Proliphix thermostat.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while interpreting a cached value.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred during device state access.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when a device enumeration code falls outside the
/// range the firmware documents.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An unknown HVAC operating mode code was encountered.
    #[error("invalid HVAC mode code: {0}")]
    InvalidHvacMode(u8),

    /// An unknown HVAC state code was encountered.
    #[error("invalid HVAC state code: {0}")]
    InvalidHvacState(u8),
}

/// Errors related to HTTP communication with the thermostat.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection to the device failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The device rejected the supplied credentials.
    #[error("authentication failed")]
    AuthenticationFailed,
}

/// Errors related to interpreting cached field values.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A cached raw string could not be parsed into the expected shape.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field whose value failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// Errors related to device state access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// A field was accessed before any refresh cached it.
    ///
    /// Accessors never fall back to a default value; callers must
    /// refresh first.
    #[error("field {field} is not cached; call refresh first")]
    FieldNotCached {
        /// The symbolic field name that was requested.
        field: String,
    },

    /// A strict write was given a field name outside the OID table.
    #[error("unknown field name: {field}")]
    UnknownField {
        /// The field name that could not be resolved.
        field: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidHvacState(42);
        assert_eq!(err.to_string(), "invalid HVAC state code: 42");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidHvacMode(9);
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::InvalidHvacMode(9))));
    }

    #[test]
    fn device_error_display() {
        let err = DeviceError::FieldNotCached {
            field: "AverageTemp".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "field AverageTemp is not cached; call refresh first"
        );
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::InvalidValue {
            field: "HvacState".to_string(),
            message: "not an integer".to_string(),
        };
        assert_eq!(err.to_string(), "failed to parse HvacState: not an integer");
    }

    #[test]
    fn unknown_field_display() {
        let err = DeviceError::UnknownField {
            field: "SetbackHeatt".to_string(),
        };
        assert_eq!(err.to_string(), "unknown field name: SetbackHeatt");
    }
}
