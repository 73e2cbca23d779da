//! # mirror-core
//!
//! Domain layer for presence mirroring: the user identifier, the post-write
//! presence snapshot, the outbound mirror event, and the sink port that
//! delivers it. No infrastructure dependencies (HTTP, runtime, config).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{PresenceChange, PresenceEvent, PresenceSnapshot};
pub use error::SinkError;
pub use traits::{MirrorResponse, MirrorSink, SinkResult};
pub use value_objects::{UserId, UserIdParseError};
