//! Domain entities

mod presence;

pub use presence::{PresenceChange, PresenceEvent, PresenceSnapshot};
