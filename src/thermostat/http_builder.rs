// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Builder for HTTP-backed thermostats.

use std::time::Duration;

use crate::error::Error;
use crate::protocol::{HttpClient, HttpConfig};
use crate::thermostat::Thermostat;

impl Thermostat<HttpClient> {
    /// Starts building a thermostat reached over HTTP.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use proliphix_lib::Thermostat;
    ///
    /// # fn example() -> proliphix_lib::Result<()> {
    /// let thermostat = Thermostat::http("192.168.1.50")
    ///     .with_credentials("admin", "password")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn http(host: impl Into<String>) -> ThermostatBuilder {
        ThermostatBuilder::new(HttpConfig::new(host))
    }

    /// Starts building a thermostat from a prepared configuration.
    ///
    /// Use this when the simple host form isn't enough, e.g. for a
    /// non-default port or an HTTPS reverse proxy.
    #[must_use]
    pub fn with_config(config: HttpConfig) -> ThermostatBuilder {
        ThermostatBuilder::new(config)
    }
}

/// Builder for creating HTTP-backed thermostats.
///
/// The device needs no capability probe, so building never touches the
/// network; the first request happens on
/// [`refresh`](Thermostat::refresh).
#[derive(Debug)]
pub struct ThermostatBuilder {
    config: HttpConfig,
}

impl ThermostatBuilder {
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Sets HTTP Basic authentication credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.config = self.config.with_credentials(username, password);
        self
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Builds the thermostat proxy.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn build(self) -> Result<Thermostat<HttpClient>, Error> {
        let client = self.config.into_client().map_err(Error::Protocol)?;
        Ok(Thermostat::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_simple_host() {
        let thermostat = Thermostat::http("192.168.1.50").build().unwrap();
        assert!(thermostat.raw_value(crate::Oid::DevName).is_none());
    }

    #[test]
    fn builder_with_options() {
        let result = Thermostat::http("192.168.1.50")
            .with_credentials("admin", "password")
            .with_port(8080)
            .with_timeout(Duration::from_secs(5))
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn builder_from_config() {
        let config = HttpConfig::new("192.168.1.50").with_https();
        let result = Thermostat::with_config(config).build();
        assert!(result.is_ok());
    }
}
