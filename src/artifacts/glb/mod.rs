//! glTF binary container (`.glb`)
//!
//! ```text
//! +--------+---------+--------+   +--------+------+---------+
//! | "glTF" | version | length |   | length | type | payload |  ...
//! +--------+---------+--------+   +--------+------+---------+
//!   4 bytes  u32 LE    u32 LE       u32 LE  4 bytes
//! ```
//!
//! The first chunk is the JSON scene description; any further chunks are kept
//! as opaque payloads.

use crate::artifacts::core::FormatReason;
use bytes::Bytes;

pub mod chunk;
pub mod container;
pub mod digest;
pub mod header;

pub const MAGIC: &[u8; 4] = b"glTF";
pub const VERSION: u32 = 2;
pub const HEADER_SIZE: usize = 12;
pub const CHUNK_HEADER_SIZE: usize = 8;
pub const MIN_CONTAINER_SIZE: usize = HEADER_SIZE + CHUNK_HEADER_SIZE;

/// Decodes a fixed-layout record from the front of a byte buffer
pub trait Unpackable: Sized {
    fn deserialize(bytes: Bytes) -> Result<Self, FormatReason>;
}

/// How an extracted container is turned into text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub indent: u8,
    pub digests: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            indent: 2,
            digests: false,
        }
    }
}
