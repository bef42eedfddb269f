// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Object identifiers understood by the thermostat firmware.
//!
//! The Proliphix protocol addresses every device field by a dotted
//! numeric identifier ("OID"). This module holds the subset of the OID
//! namespace the library models, together with the symbolic names used
//! throughout the API, and the bulk query used to read them all at once.

use std::fmt;

/// A device field addressed by the thermostat's OID namespace.
///
/// Each variant maps a dotted numeric identifier to a symbolic field
/// name. The mapping is fixed at compile time and bijective: no two
/// variants share an identifier or a name.
///
/// # Examples
///
/// ```
/// use proliphix_lib::Oid;
///
/// assert_eq!(Oid::SetbackHeat.id(), "4.1.5");
/// assert_eq!(Oid::from_name("DevName"), Some(Oid::DevName));
/// assert_eq!(Oid::from_name("NotAField"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Oid {
    /// Device name (free text).
    DevName,
    /// HVAC operating mode (off, heat, cool, auto).
    HvacMode,
    /// Active schedule class code.
    CurrentClass,
    /// Average measured temperature, in deci-degrees.
    AverageTemp,
    /// Current HVAC state machine position.
    HvacState,
    /// Fan state code; `2` means the fan is running.
    FanState,
    /// Heating setback setpoint, in deci-degrees.
    SetbackHeat,
    /// Cooling setback setpoint, in deci-degrees.
    SetbackCool,
    /// Heat stage 1 runtime in seconds since the last reset.
    Heat1Usage,
    /// Cool stage 1 runtime in seconds since the last reset.
    Cool1Usage,
    /// Fan runtime in seconds since the last reset.
    FanUsage,
    /// Epoch timestamp of the last usage counter reset.
    LastUsageReset,
}

impl Oid {
    /// Every OID the library models, sorted by identifier.
    ///
    /// This is also the order of the tokens in [`bulk_query`].
    pub const ALL: [Self; 12] = [
        Self::DevName,
        Self::HvacMode,
        Self::CurrentClass,
        Self::AverageTemp,
        Self::HvacState,
        Self::FanState,
        Self::SetbackHeat,
        Self::SetbackCool,
        Self::Heat1Usage,
        Self::Cool1Usage,
        Self::FanUsage,
        Self::LastUsageReset,
    ];

    /// Returns the dotted numeric identifier for this field.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::DevName => "1.2",
            Self::HvacMode => "4.1.1",
            Self::CurrentClass => "4.1.11",
            Self::AverageTemp => "4.1.13",
            Self::HvacState => "4.1.2",
            Self::FanState => "4.1.4",
            Self::SetbackHeat => "4.1.5",
            Self::SetbackCool => "4.1.6",
            Self::Heat1Usage => "4.5.1",
            Self::Cool1Usage => "4.5.3",
            Self::FanUsage => "4.5.5",
            Self::LastUsageReset => "4.5.6",
        }
    }

    /// Returns the symbolic field name for this field.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DevName => "DevName",
            Self::HvacMode => "HvacMode",
            Self::CurrentClass => "CurrentClass",
            Self::AverageTemp => "AverageTemp",
            Self::HvacState => "HvacState",
            Self::FanState => "FanState",
            Self::SetbackHeat => "SetbackHeat",
            Self::SetbackCool => "SetbackCool",
            Self::Heat1Usage => "Heat1Usage",
            Self::Cool1Usage => "Cool1Usage",
            Self::FanUsage => "FanUsage",
            Self::LastUsageReset => "LastUsageReset",
        }
    }

    /// Looks up a field by its dotted identifier.
    ///
    /// Returns `None` for identifiers outside the modeled subset, so
    /// callers can ignore fields newer firmware exposes.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().find(|oid| oid.id() == id).copied()
    }

    /// Looks up a field by its symbolic name.
    ///
    /// Returns `None` for unknown names; unknown names are never an
    /// error at this layer.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().find(|oid| oid.name() == name).copied()
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Builds the query body requesting every modeled OID at once.
///
/// One empty-valued `OID<id>=` token per table entry, joined with `&`.
/// The device answers with the same token format, values filled in.
#[must_use]
pub fn bulk_query() -> String {
    Oid::ALL
        .iter()
        .map(|oid| format!("OID{}=", oid.id()))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_lookup_roundtrip() {
        for oid in Oid::ALL {
            assert_eq!(Oid::from_id(oid.id()), Some(oid));
        }
    }

    #[test]
    fn name_lookup_roundtrip() {
        for oid in Oid::ALL {
            assert_eq!(Oid::from_name(oid.name()), Some(oid));
        }
    }

    #[test]
    fn identifiers_are_unique() {
        for (i, a) in Oid::ALL.iter().enumerate() {
            for b in &Oid::ALL[i + 1..] {
                assert_ne!(a.id(), b.id());
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn unknown_lookups_return_none() {
        assert_eq!(Oid::from_id("9.9.9"), None);
        assert_eq!(Oid::from_name("AverageTemp2"), None);
    }

    #[test]
    fn bulk_query_token_per_entry() {
        let query = bulk_query();
        let tokens: Vec<&str> = query.split('&').collect();
        assert_eq!(tokens.len(), Oid::ALL.len());
        for (token, oid) in tokens.iter().zip(Oid::ALL) {
            assert_eq!(*token, format!("OID{}=", oid.id()));
        }
    }

    #[test]
    fn bulk_query_exact_body() {
        assert_eq!(
            bulk_query(),
            "OID1.2=&OID4.1.1=&OID4.1.11=&OID4.1.13=&OID4.1.2=\
             &OID4.1.4=&OID4.1.5=&OID4.1.6=&OID4.5.1=&OID4.5.3=\
             &OID4.5.5=&OID4.5.6="
        );
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Oid::AverageTemp.to_string(), "AverageTemp");
    }
}
