//! Serial number issuance.
//!
//! Every container and ship receives a serial of the form `KON-<prefix>-<n>`,
//! where `n` counts up from 1 independently for each prefix. The
//! [`SerialIssuer`] is an explicit object: the [`Registry`](crate::Registry)
//! constructs one and passes it nothing but prefixes, so counters live exactly
//! as long as the registry that owns them.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Leading segment shared by every issued serial.
pub const SERIAL_NAMESPACE: &str = "KON";

/// Prefix used for container ships.
pub const SHIP_PREFIX: &str = "S";

/// Unique identifier of a container or a ship.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerialNumber(String);

impl SerialNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Type prefix of a well-formed `KON-<prefix>-<n>` serial.
    pub fn prefix(&self) -> Option<&str> {
        let mut parts = self.0.splitn(3, '-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(SERIAL_NAMESPACE), Some(prefix), Some(_)) if !prefix.is_empty() => Some(prefix),
            _ => None,
        }
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SerialNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SerialNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SerialNumber {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Error returned when parsing an empty serial number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptySerialError;

impl fmt::Display for EmptySerialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("serial number must not be empty")
    }
}

impl std::error::Error for EmptySerialError {}

impl FromStr for SerialNumber {
    type Err = EmptySerialError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EmptySerialError);
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Hands out per-prefix sequential serial numbers.
///
/// The counter map is guarded by a mutex, so `issue` is an atomic
/// read-modify-write even when the issuer is shared between threads.
#[derive(Debug, Default)]
pub struct SerialIssuer {
    next: Mutex<HashMap<String, u64>>,
}

impl SerialIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next serial number for `prefix`.
    ///
    /// The first call for a never-seen prefix yields `KON-<prefix>-1`; every
    /// later call increments the suffix by one. No prefix is rejected.
    pub fn issue(&self, prefix: &str) -> SerialNumber {
        let mut next = self.next.lock().unwrap_or_else(|e| e.into_inner());
        let counter = next.entry(prefix.to_string()).or_insert(0);
        *counter += 1;
        let serial = SerialNumber(format!("{SERIAL_NAMESPACE}-{prefix}-{counter}"));
        debug!(%serial, "issued serial number");
        serial
    }

    /// Last number issued for `prefix`, if any.
    pub fn last_issued(&self, prefix: &str) -> Option<u64> {
        let next = self.next.lock().unwrap_or_else(|e| e.into_inner());
        next.get(prefix).copied()
    }
}
