//! Traits (ports) for the infrastructure layer

mod sink;

pub use sink::{MirrorResponse, MirrorSink, SinkResult};
