// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Proliphix Lib - A Rust library to control Proliphix network
//! thermostats.
//!
//! Proliphix NT-series thermostats are ethernet-connected and expose a
//! local HTTP interface based on getting and setting OID values. This
//! library wraps that interface behind a typed API: one bulk read
//! fills a local cache, typed accessors interpret the cached values,
//! and setters push setpoints back to the device.
//!
//! # Supported Features
//!
//! - **State queries**: device name, measured temperature, HVAC
//!   mode/state, fan state, runtime usage counters
//! - **Setpoint control**: heating and cooling setback temperatures,
//!   HVAC operating mode
//! - **Raw field access**: pass-through reads and writes by symbolic
//!   field name for OIDs the typed surface doesn't model
//!
//! # Caching Model
//!
//! The device firmware recommends polling no more than once a minute
//! during sustained use, so reads are split in two: an explicit
//! [`Thermostat::refresh`] fetches every modeled field in a single
//! request, and accessors answer from the cache without any network
//! I/O. Accessing a field that was never cached is an error, never a
//! silent default.
//!
//! # Quick Start
//!
//! ```no_run
//! use proliphix_lib::{Temperature, Thermostat};
//!
//! #[tokio::main]
//! async fn main() -> proliphix_lib::Result<()> {
//!     let mut thermostat = Thermostat::http("192.168.1.50")
//!         .with_credentials("admin", "password")
//!         .build()?;
//!
//!     // One request caches every modeled field.
//!     thermostat.refresh().await?;
//!
//!     println!(
//!         "{}: {} ({})",
//!         thermostat.device_name()?,
//!         thermostat.current_temperature()?,
//!         thermostat.hvac_state()?,
//!     );
//!
//!     // Push a new heating setpoint.
//!     thermostat
//!         .set_setback_heat(Temperature::from_degrees(68.0))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Raw Field Writes
//!
//! ```no_run
//! use proliphix_lib::Thermostat;
//!
//! # async fn example() -> proliphix_lib::Result<()> {
//! # let thermostat = Thermostat::http("192.168.1.50").build()?;
//! // Unknown names are dropped silently; use set_fields_strict to
//! // reject them instead.
//! thermostat.set_fields(&[("SetbackHeat", "680")]).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod oid;
pub mod protocol;
mod state;
mod thermostat;
pub mod types;

pub use error::{DeviceError, Error, ParseError, ProtocolError, Result, ValueError};
pub use oid::{Oid, bulk_query};
pub use protocol::{HttpClient, HttpConfig, Protocol};
pub use state::ThermostatState;
pub use thermostat::{Thermostat, ThermostatBuilder};
pub use types::{FanState, HvacMode, HvacState, Temperature};
