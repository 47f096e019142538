use byteorder::{LittleEndian, WriteBytesExt};
use derive_new::new;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, new)]
pub struct ChunkSpec {
    pub tag: [u8; 4],
    pub payload: Vec<u8>,
}

/// A `.glb` file to be written into a test directory
#[derive(Debug, Clone, new)]
pub struct GlbSpec {
    pub path: PathBuf,
    pub chunks: Vec<ChunkSpec>,
}

impl GlbSpec {
    pub fn with_json(path: PathBuf, json: &str) -> Self {
        GlbSpec::new(path, vec![json_chunk(json)])
    }

    pub fn with_binary(mut self, payload: &[u8]) -> Self {
        self.chunks.push(ChunkSpec::new(*b"BIN\0", payload.to_vec()));
        self
    }
}

pub fn json_chunk(json: &str) -> ChunkSpec {
    let mut payload = json.as_bytes().to_vec();
    while payload.len() % 4 != 0 {
        payload.push(b' ');
    }
    ChunkSpec::new(*b"JSON", payload)
}

pub fn to_bytes(chunks: &[ChunkSpec]) -> Vec<u8> {
    let mut body = Vec::new();
    for chunk in chunks {
        body.write_u32::<LittleEndian>(chunk.payload.len() as u32)
            .expect("Failed to write chunk length");
        body.write_all(&chunk.tag).expect("Failed to write chunk type");
        body.write_all(&chunk.payload)
            .expect("Failed to write chunk payload");
    }

    let mut bytes = Vec::new();
    bytes.write_all(b"glTF").expect("Failed to write magic");
    bytes.write_u32::<LittleEndian>(2)
        .expect("Failed to write version");
    bytes.write_u32::<LittleEndian>((12 + body.len()) as u32)
        .expect("Failed to write length");
    bytes.extend(body);
    bytes
}

pub fn write_glb(spec: GlbSpec) {
    if let Some(parent) = spec.path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    std::fs::write(&spec.path, to_bytes(&spec.chunks)).expect("Failed to write glb file");
}

pub fn write_json_glb(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    write_glb(GlbSpec::with_json(path.clone(), json));
    path
}
