//! Test fixtures and data generators

use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A user id no other test uses
pub fn unique_uid() -> String {
    format!("user{}", unique_suffix())
}

/// Trigger body for a create/update with the given post-write record
pub fn presence_write(after: Value) -> Value {
    json!({ "before": null, "after": after })
}

/// Trigger body for a deleted record
pub fn presence_delete() -> Value {
    json!({ "before": { "online": true }, "after": null })
}

/// Trigger acknowledgement
#[derive(Debug, Deserialize)]
pub struct TriggerAck {
    pub outcome: String,
}

/// Readiness response
#[derive(Debug, Deserialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Deserialize)]
pub struct ReadinessChecks {
    pub mirror_url: String,
}
