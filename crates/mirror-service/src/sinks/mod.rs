//! `MirrorSink` implementations

mod http;

pub use http::HttpMirrorSink;
