//! Integration test utilities for the presence mirror
//!
//! This crate provides helpers for running the trigger ingress end to end
//! against a mocked mirror endpoint.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
