// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for communicating with Proliphix thermostats.
//!
//! The device exposes two HTTP endpoints: a bulk read endpoint that
//! answers a query for OID values, and a settings endpoint that accepts
//! form-encoded writes. [`HttpClient`] implements both over HTTP Basic
//! authentication; the [`Protocol`] trait is the seam that lets the
//! proxy stay independent of the concrete transport.

mod http;

pub use http::{Credentials, HttpClient, HttpConfig};

use crate::error::ProtocolError;

/// Trait for transports that can reach a Proliphix thermostat.
///
/// Both operations are single request/response exchanges; the
/// transport performs no retries and keeps no protocol state.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Posts a bulk read query to the device and returns the raw
    /// response body.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the device
    /// rejects it.
    async fn fetch(&self, query: &str) -> Result<String, ProtocolError>;

    /// Posts a form-encoded settings body to the device.
    ///
    /// The device's response body is unspecified and discarded.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the device
    /// rejects it.
    async fn submit(&self, form: &str) -> Result<(), ProtocolError>;
}
