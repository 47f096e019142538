use byteorder::{ByteOrder, LittleEndian};
use bytes::Bytes;
use derive_new::new;
use std::fmt;

pub const JSON_TAG: u32 = 0x4E4F534A;
pub const BIN_TAG: u32 = 0x004E4942;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkType {
    Json,
    Bin,
    Other(u32),
}

impl ChunkType {
    pub fn from_tag(tag: u32) -> Self {
        match tag {
            JSON_TAG => ChunkType::Json,
            BIN_TAG => ChunkType::Bin,
            other => ChunkType::Other(other),
        }
    }

    pub fn from_bytes(tag: &[u8; 4]) -> Self {
        Self::from_tag(LittleEndian::read_u32(tag))
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkType::Json => write!(f, "JSON"),
            ChunkType::Bin => write!(f, "BIN"),
            ChunkType::Other(tag) => write!(f, "0x{:08X}", tag),
        }
    }
}

/// A chunk payload, sliced out of the file buffer without copying
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Chunk {
    pub(crate) chunk_type: ChunkType,
    pub(crate) data: Bytes,
}

impl Chunk {
    pub fn chunk_type(&self) -> ChunkType {
        self.chunk_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_match_their_ascii_names() {
        assert_eq!(ChunkType::from_bytes(b"JSON"), ChunkType::Json);
        assert_eq!(ChunkType::from_bytes(b"BIN\0"), ChunkType::Bin);
    }

    #[test]
    fn unknown_tag_displays_as_hex() {
        let chunk_type = ChunkType::from_bytes(b"EXT1");

        assert_eq!(chunk_type, ChunkType::Other(0x31545845));
        assert_eq!(chunk_type.to_string(), "0x31545845");
    }
}
