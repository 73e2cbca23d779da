//! Presence entities
//!
//! `PresenceChange` is what the trigger platform delivers for a write to
//! `/presence/{uId}`; `PresenceSnapshot` is the recognized post-write record;
//! `PresenceEvent` is the normalized payload mirrored downstream.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::value_objects::UserId;

/// Record field carrying the online flag
const ONLINE_FIELD: &str = "online";
/// Record field carrying the last-seen timestamp
const LAST_ONLINE_FIELD: &str = "lastOnline";

/// A single write to a presence path, as delivered by the trigger platform
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PresenceChange {
    /// Value before the write (unused, accepted for completeness)
    #[serde(default)]
    pub before: Value,
    /// Value after the write (`null` when the record was deleted)
    #[serde(default)]
    pub after: Value,
}

impl PresenceChange {
    /// Create a change from raw before/after values
    #[must_use]
    pub fn new(before: Value, after: Value) -> Self {
        Self { before, after }
    }

    /// Post-write snapshot, if the new value is a recognizable record
    #[must_use]
    pub fn after_snapshot(&self) -> Option<PresenceSnapshot> {
        PresenceSnapshot::from_value(self.after.clone())
    }
}

/// Post-write presence record
///
/// Only JSON objects are recognized. `null` (deleted), primitives and arrays
/// carry nothing to mirror.
#[derive(Debug, Clone, PartialEq)]
pub struct PresenceSnapshot {
    fields: Map<String, Value>,
}

impl PresenceSnapshot {
    /// Recognize a snapshot from a raw database value
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Online flag; absent, null or non-boolean reads as `false`
    ///
    /// A non-boolean value (`1`, `"yes"`) is not forwarded as-is: the
    /// outbound `online` field is always a JSON boolean, so anything that is
    /// not `true` mirrors as offline. Callers can detect the case with
    /// [`has_malformed_online`](Self::has_malformed_online).
    #[must_use]
    pub fn online(&self) -> bool {
        self.fields
            .get(ONLINE_FIELD)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Whether `online` holds something other than a boolean or null
    #[must_use]
    pub fn has_malformed_online(&self) -> bool {
        self.fields
            .get(ONLINE_FIELD)
            .is_some_and(|v| !v.is_boolean() && !v.is_null())
    }

    /// Last-seen timestamp, untouched; null reads as absent
    #[must_use]
    pub fn last_online(&self) -> Option<&Value> {
        self.fields.get(LAST_ONLINE_FIELD).filter(|v| !v.is_null())
    }
}

/// Normalized payload sent to the mirror endpoint
///
/// Serializes as `{"uid": ..., "online": ..., "lastOnline": ...}`;
/// `lastOnline` is omitted when the record had none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceEvent {
    pub uid: UserId,
    pub online: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_online: Option<Value>,
}

impl PresenceEvent {
    /// Shape the outbound payload from a snapshot
    #[must_use]
    pub fn from_snapshot(uid: UserId, snapshot: &PresenceSnapshot) -> Self {
        Self {
            uid,
            online: snapshot.online(),
            last_online: snapshot.last_online().cloned(),
        }
    }
}
