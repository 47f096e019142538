//! Core error types
//!
//! Every failure is terminal for an invocation. Errors carry the path (or
//! program) they concern so a single line on stderr is enough to diagnose them.

use crate::artifacts::glb::chunk::ChunkType;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlbError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write scratch file for {label}")]
    Scratch {
        label: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {reason}", path.display())]
    Format { path: PathBuf, reason: FormatReason },

    #[error("cannot render the JSON document")]
    Render(#[from] serde_json::Error),

    #[error("cannot write diff output")]
    Output {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to run {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} was terminated by a signal")]
    Terminated { program: String },
}

/// Why a file is not a usable glTF binary container
#[derive(Error, Debug)]
pub enum FormatReason {
    #[error("file too short for a glTF binary container ({0} bytes)")]
    TooShort(usize),

    #[error("not a glTF binary file")]
    BadMagic,

    #[error("unsupported glTF binary version {0}, only version 2 is supported")]
    UnsupportedVersion(u32),

    #[error("truncated container: header declares {declared} bytes but file has {actual}")]
    TruncatedContainer { declared: usize, actual: usize },

    #[error("truncated chunk at offset {offset}")]
    TruncatedChunk { offset: usize },

    #[error("first chunk is {0}, expected JSON")]
    MissingJsonChunk(ChunkType),

    #[error("duplicate JSON chunk (chunk #{index})")]
    DuplicateJsonChunk { index: usize },

    #[error("JSON chunk is not valid UTF-8: {0}")]
    InvalidUtf8(std::str::Utf8Error),

    #[error("malformed JSON payload: {0}")]
    MalformedJson(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GlbError>;
