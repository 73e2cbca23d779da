//! Services
//!
//! Business logic for the trigger path.

mod presence_mirror;

pub use presence_mirror::{DeliveryHandle, MirrorOutcome, PresenceMirrorHandler};
