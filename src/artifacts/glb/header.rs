use crate::artifacts::core::FormatReason;
use crate::artifacts::glb::chunk::ChunkType;
use crate::artifacts::glb::{CHUNK_HEADER_SIZE, HEADER_SIZE, MAGIC, Unpackable, VERSION};
use byteorder::{ByteOrder, LittleEndian};
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct GlbHeader {
    pub(crate) version: u32,
    pub(crate) length: u32,
}

impl Unpackable for GlbHeader {
    fn deserialize(bytes: Bytes) -> Result<Self, FormatReason> {
        if bytes.len() < HEADER_SIZE {
            return Err(FormatReason::TooShort(bytes.len()));
        }

        if &bytes[0..4] != MAGIC {
            return Err(FormatReason::BadMagic);
        }

        let version = LittleEndian::read_u32(&bytes[4..8]);
        if version != VERSION {
            return Err(FormatReason::UnsupportedVersion(version));
        }
        let length = LittleEndian::read_u32(&bytes[8..12]);

        Ok(GlbHeader { version, length })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ChunkHeader {
    pub(crate) length: u32,
    pub(crate) chunk_type: ChunkType,
}

impl Unpackable for ChunkHeader {
    fn deserialize(bytes: Bytes) -> Result<Self, FormatReason> {
        if bytes.len() < CHUNK_HEADER_SIZE {
            return Err(FormatReason::TooShort(bytes.len()));
        }

        let length = LittleEndian::read_u32(&bytes[0..4]);
        let chunk_type = ChunkType::from_tag(LittleEndian::read_u32(&bytes[4..8]));

        Ok(ChunkHeader { length, chunk_type })
    }
}
