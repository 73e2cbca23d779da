//! # mirror-service
//!
//! The presence mirror handler and the sinks it delivers through.

pub mod services;
pub mod sinks;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

// Re-export commonly used types at crate root
pub use services::{DeliveryHandle, MirrorOutcome, PresenceMirrorHandler};
pub use sinks::HttpMirrorSink;
