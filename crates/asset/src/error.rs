//! Typed asset errors.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("OBJ source unavailable ({path}): {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Malformed face on line {line}: {reason}")]
    MalformedFace { line: usize, reason: String },

    #[error("Invalid '{directive}' attribute on line {line}: {reason}")]
    InvalidAttribute {
        line: usize,
        directive: &'static str,
        reason: String,
    },

    #[error("OBJ contained no triangles")]
    EmptyMesh,
}

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("Failed to decode image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported channel count: {0}")]
    UnsupportedChannels(u8),

    #[error("Texture data size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}
