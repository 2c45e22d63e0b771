//! Interface version types
//!
//! The data service reports the interface versions it supports as a range.
//! Capability checks compare a single "current" version (the highest the
//! server offers) against per-feature minimum versions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A three-part interface version, ordered lexicographically by
/// major, minor, patch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApiVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ApiVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Error returned when a version string cannot be parsed
#[derive(Debug, thiserror::Error)]
#[error("invalid interface version: {0:?}")]
pub struct ParseVersionError(String);

impl FromStr for ApiVersion {
    type Err = ParseVersionError;

    /// Parses `"major.minor"` or `"major.minor.patch"`. A missing patch
    /// component is treated as zero, matching version strings emitted by
    /// older servers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().splitn(3, '.');
        let mut next = |required: bool| -> Result<u32, ParseVersionError> {
            match parts.next() {
                Some(p) => p.parse().map_err(|_| ParseVersionError(s.to_string())),
                None if required => Err(ParseVersionError(s.to_string())),
                None => Ok(0),
            }
        };

        let major = next(true)?;
        let minor = next(true)?;
        let patch = next(false)?;

        Ok(Self {
            major,
            minor,
            patch,
        })
    }
}

impl TryFrom<String> for ApiVersion {
    type Error = ParseVersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ApiVersion> for String {
    fn from(value: ApiVersion) -> Self {
        value.to_string()
    }
}

/// The range of interface versions a server claims to support
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceVersionRange {
    pub supported_versions: Vec<ApiVersion>,
}

impl InterfaceVersionRange {
    /// Range containing a single version
    pub fn single(version: ApiVersion) -> Self {
        Self {
            supported_versions: vec![version],
        }
    }

    /// Reduces the range to the version used for capability comparisons:
    /// the highest version the server supports. Empty ranges reduce to
    /// `None`.
    pub fn current_version(&self) -> Option<ApiVersion> {
        self.supported_versions.iter().copied().max()
    }
}
