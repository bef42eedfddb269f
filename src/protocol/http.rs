// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for Proliphix thermostats.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};

use crate::error::ProtocolError;
use crate::protocol::Protocol;

/// Path of the bulk read endpoint.
const GET_PATH: &str = "/get";
/// Path of the settings write endpoint.
const SET_PATH: &str = "/pdp";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Configuration for an HTTP-connected thermostat.
///
/// A simple value object holding connection parameters. The protocol
/// is stateless; every operation is an independent request.
///
/// # Examples
///
/// ```
/// use proliphix_lib::HttpConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = HttpConfig::new("192.168.1.50");
///
/// // With all options
/// let config = HttpConfig::new("192.168.1.50")
///     .with_port(8080)
///     .with_credentials("admin", "password")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    use_https: bool,
    credentials: Option<(String, String)>,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default HTTPS port.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the thermostat
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            credentials: None,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS, for devices reached through a TLS reverse proxy.
    ///
    /// If port hasn't been explicitly set, it will be changed to 443.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        if self.port == Self::DEFAULT_PORT {
            self.port = Self::DEFAULT_HTTPS_PORT;
        }
        self
    }

    /// Sets HTTP Basic authentication credentials.
    ///
    /// The thermostat's admin interface requires these for both the
    /// read and write endpoints.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the credentials if set.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        self.credentials
            .as_ref()
            .map(|(u, p)| (u.as_str(), p.as_str()))
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        let port_suffix =
            if (self.use_https && self.port == 443) || (!self.use_https && self.port == 80) {
                String::new()
            } else {
                format!(":{}", self.port)
            };
        format!("{scheme}://{}{port_suffix}", self.host)
    }

    /// Creates an [`HttpClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        let base_url = self.base_url();

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        let credentials = self
            .credentials
            .map(|(username, password)| Credentials { username, password });

        Ok(HttpClient {
            base_url,
            client,
            credentials,
        })
    }
}

/// HTTP Basic authentication credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Username for authentication.
    pub username: String,
    /// Password for authentication.
    pub password: String,
}

/// HTTP client for communicating with a Proliphix thermostat.
///
/// Issues form-encoded POST requests against the device's `/get` and
/// `/pdp` endpoints, authenticating with HTTP Basic auth when
/// credentials are configured.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    credentials: Option<Credentials>,
}

impl HttpClient {
    /// Creates a client for the specified host with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Posts a form body to the given device path and checks the
    /// response status.
    async fn post(&self, path: &str, body: String) -> Result<reqwest::Response, ProtocolError> {
        let url = format!("{}{path}", self.base_url);

        let mut request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body);

        if let Some(creds) = &self.credentials {
            request = request.basic_auth(&creds.username, Some(&creds.password));
        }

        let response = request.send().await.map_err(ProtocolError::Http)?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ProtocolError::AuthenticationFailed);
        }

        if !response.status().is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        Ok(response)
    }
}

impl Protocol for HttpClient {
    async fn fetch(&self, query: &str) -> Result<String, ProtocolError> {
        tracing::debug!(query = %query, "Requesting thermostat state");

        let response = self.post(GET_PATH, query.to_string()).await?;
        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Received thermostat state");

        Ok(body)
    }

    async fn submit(&self, form: &str) -> Result<(), ProtocolError> {
        tracing::debug!(form = %form, "Submitting thermostat settings");

        // The device's response body carries nothing useful; only the
        // status matters.
        self.post(SET_PATH, form.to_string()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = HttpConfig::new("192.168.1.50");
        assert_eq!(config.host(), "192.168.1.50");
        assert_eq!(config.port(), 80);
        assert!(config.credentials().is_none());
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn config_with_port() {
        let config = HttpConfig::new("192.168.1.50").with_port(8080);
        assert_eq!(config.port(), 8080);
    }

    #[test]
    fn config_with_https() {
        let config = HttpConfig::new("192.168.1.50").with_https();
        assert_eq!(config.port(), 443);
        assert_eq!(config.base_url(), "https://192.168.1.50");
    }

    #[test]
    fn config_with_https_custom_port() {
        let config = HttpConfig::new("192.168.1.50").with_port(8443).with_https();
        assert_eq!(config.port(), 8443);
        assert_eq!(config.base_url(), "https://192.168.1.50:8443");
    }

    #[test]
    fn config_with_credentials() {
        let config = HttpConfig::new("192.168.1.50").with_credentials("admin", "secret");
        let creds = config.credentials().unwrap();
        assert_eq!(creds.0, "admin");
        assert_eq!(creds.1, "secret");
    }

    #[test]
    fn config_base_url_http() {
        let config = HttpConfig::new("192.168.1.50");
        assert_eq!(config.base_url(), "http://192.168.1.50");
    }

    #[test]
    fn config_base_url_custom_port() {
        let config = HttpConfig::new("192.168.1.50").with_port(8080);
        assert_eq!(config.base_url(), "http://192.168.1.50:8080");
    }

    #[test]
    fn config_into_client() {
        let config = HttpConfig::new("192.168.1.50").with_credentials("admin", "pass");
        let client = config.into_client().unwrap();
        assert_eq!(client.base_url(), "http://192.168.1.50");
        assert!(client.credentials.is_some());
    }

    #[test]
    fn client_new_defaults() {
        let client = HttpClient::new("192.168.1.50").unwrap();
        assert_eq!(client.base_url(), "http://192.168.1.50");
        assert!(client.credentials.is_none());
    }
}
