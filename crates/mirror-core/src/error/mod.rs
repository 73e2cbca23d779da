//! Domain errors

mod sink_error;

pub use sink_error::SinkError;
