//! User ID - opaque identifier taken from the presence path parameter
//!
//! The realtime database keys presence records by whatever id the auth
//! provider issued, so the value is kept as an uninterpreted string.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque user identifier (`/presence/{uId}`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Parse from the raw path segment
    pub fn parse(s: &str) -> Result<Self, UserIdParseError> {
        if s.trim().is_empty() {
            return Err(UserIdParseError::Empty);
        }
        Ok(Self(s.to_string()))
    }

    /// Borrow the raw identifier
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error when parsing a UserId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserIdParseError {
    #[error("user id must not be empty")]
    Empty,
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = UserIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
