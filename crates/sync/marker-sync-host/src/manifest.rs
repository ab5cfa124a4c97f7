//! Descriptive identity block for the host's extension listing.
//!
//! Purely informational: the host shows it in its extension list, nothing
//! in the frame path reads it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic version triple, used both for the extension itself and for the
/// oldest host release it supports.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl Version {
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionParseError {
    #[error("expected 'major.minor.patch', got '{0}'")]
    Shape(String),

    #[error("invalid version component '{0}'")]
    Component(String),
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(major), Some(minor), Some(patch), None) => Ok(Self {
                major: parse_component(major)?,
                minor: parse_component(minor)?,
                patch: parse_component(patch)?,
            }),
            _ => Err(VersionParseError::Shape(s.to_string())),
        }
    }
}

fn parse_component(part: &str) -> Result<u16, VersionParseError> {
    part.parse::<u16>()
        .map_err(|_| VersionParseError::Component(part.to_string()))
}

/// Identity/version block consumed by the host's extension listing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    pub name: String,
    pub author: String,
    pub version: Version,
    /// Oldest host release the extension is known to work with.
    pub min_host_version: Version,
    /// Where the extension surfaces in the host UI.
    pub location: String,
    pub description: String,
    pub category: String,
}

/// The block for this extension.
pub fn manifest() -> Manifest {
    Manifest {
        name: "Collection Marker Sync".to_string(),
        author: "medmor".to_string(),
        version: Version::new(1, 0, 0),
        min_host_version: Version::new(3, 0, 0),
        location: "Timeline".to_string(),
        description: "Syncs collection visibility with timeline markers".to_string(),
        category: "Animation".to_string(),
    }
}
