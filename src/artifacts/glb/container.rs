use crate::artifacts::core::{FormatReason, GlbError};
use crate::artifacts::glb::chunk::{Chunk, ChunkType};
use crate::artifacts::glb::digest::ChunkDigest;
use crate::artifacts::glb::header::{ChunkHeader, GlbHeader};
use crate::artifacts::glb::{
    CHUNK_HEADER_SIZE, HEADER_SIZE, MAGIC, MIN_CONTAINER_SIZE, RenderOptions, Unpackable,
};
use crate::artifacts::json::document::JsonDocument;
use bytes::Bytes;
use std::path::Path;
use tracing::{debug, trace};

/// A parsed `.glb` file: its header, JSON document and remaining chunks
#[derive(Debug, Clone)]
pub struct GlbContainer {
    header: GlbHeader,
    document: JsonDocument,
    chunks: Vec<Chunk>,
}

impl GlbContainer {
    pub fn from_file(path: &Path) -> Result<Self, GlbError> {
        let data = std::fs::read(path).map_err(|source| GlbError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let size = data.len();

        let container = Self::from_bytes(Bytes::from(data)).map_err(|reason| GlbError::Format {
            path: path.to_path_buf(),
            reason,
        })?;
        debug!(
            path = %path.display(),
            size,
            version = container.version(),
            chunks = container.chunks.len() + 1,
            "read container"
        );

        Ok(container)
    }

    pub fn from_bytes(bytes: Bytes) -> Result<Self, FormatReason> {
        if bytes.len() >= MAGIC.len() && &bytes[..MAGIC.len()] != MAGIC {
            return Err(FormatReason::BadMagic);
        }
        if bytes.len() < MIN_CONTAINER_SIZE {
            return Err(FormatReason::TooShort(bytes.len()));
        }

        let header = GlbHeader::deserialize(bytes.slice(..HEADER_SIZE))?;
        let declared = header.length as usize;
        if declared > bytes.len() {
            return Err(FormatReason::TruncatedContainer {
                declared,
                actual: bytes.len(),
            });
        }
        if declared < MIN_CONTAINER_SIZE {
            return Err(FormatReason::TooShort(declared));
        }

        let mut chunks = read_chunk_table(bytes.slice(..declared))?.into_iter();

        // the table holds at least one chunk since declared >= MIN_CONTAINER_SIZE
        let json_chunk = chunks
            .next()
            .ok_or(FormatReason::TooShort(declared))?;
        if json_chunk.chunk_type != ChunkType::Json {
            return Err(FormatReason::MissingJsonChunk(json_chunk.chunk_type));
        }

        let chunks: Vec<Chunk> = chunks.collect();
        if let Some(position) = chunks.iter().position(|c| c.chunk_type == ChunkType::Json) {
            return Err(FormatReason::DuplicateJsonChunk {
                index: position + 1,
            });
        }

        let text = std::str::from_utf8(&json_chunk.data).map_err(FormatReason::InvalidUtf8)?;
        let document = JsonDocument::parse(text).map_err(FormatReason::MalformedJson)?;

        Ok(GlbContainer {
            header,
            document,
            chunks,
        })
    }

    pub fn version(&self) -> u32 {
        self.header.version
    }

    pub fn document(&self) -> &JsonDocument {
        &self.document
    }

    /// Chunks following the JSON chunk, in file order
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn render(&self, options: &RenderOptions) -> serde_json::Result<String> {
        let mut text = self.document.render(options.indent)?;

        if options.digests {
            for chunk in &self.chunks {
                text.push_str(&ChunkDigest::of(chunk).to_string());
                text.push('\n');
            }
        }

        Ok(text)
    }
}

fn read_chunk_table(body: Bytes) -> Result<Vec<Chunk>, FormatReason> {
    let mut chunks = Vec::new();
    let mut offset = HEADER_SIZE;

    while offset < body.len() {
        if offset + CHUNK_HEADER_SIZE > body.len() {
            return Err(FormatReason::TruncatedChunk { offset });
        }

        let chunk_header =
            ChunkHeader::deserialize(body.slice(offset..offset + CHUNK_HEADER_SIZE))?;
        let start = offset + CHUNK_HEADER_SIZE;
        let end = start
            .checked_add(chunk_header.length as usize)
            .filter(|end| *end <= body.len())
            .ok_or(FormatReason::TruncatedChunk { offset })?;

        trace!(
            offset,
            length = chunk_header.length,
            chunk_type = %chunk_header.chunk_type,
            "chunk"
        );
        chunks.push(Chunk::new(chunk_header.chunk_type, body.slice(start..end)));
        offset = end;
    }

    Ok(chunks)
}
