//! Per-invocation resources
//!
//! - `scratch`: temporary files holding rendered documents for the diff utility
//! - `session`: the output writer and options shared by every command

pub mod scratch;
pub mod session;
