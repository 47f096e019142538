use crate::artifacts::glb::chunk::{Chunk, ChunkType};
use sha2::{Digest, Sha256};
use std::fmt;

/// SHA-256 fingerprint of an opaque chunk, so binary changes show up in text diffs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkDigest {
    chunk_type: ChunkType,
    hex: String,
}

impl ChunkDigest {
    pub fn of(chunk: &Chunk) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(chunk.data());

        ChunkDigest {
            chunk_type: chunk.chunk_type(),
            hex: format!("{:x}", hasher.finalize()),
        }
    }
}

impl fmt::Display for ChunkDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.chunk_type {
            ChunkType::Bin => write!(f, "Binary chunk: sha256 {}", self.hex),
            ChunkType::Json => write!(f, "JSON chunk: sha256 {}", self.hex),
            other => write!(f, "Extra chunk {}: sha256 {}", other, self.hex),
        }
    }
}
