//! glTF binary data structures and the diff plumbing around them
//!
//! - `core`: error types shared by every other module
//! - `diff`: external diff utility invocation and output coloring
//! - `glb`: container header, chunk table and chunk digests
//! - `json`: JSON document parsing and deterministic rendering

pub mod core;
pub mod diff;
pub mod glb;
pub mod json;
