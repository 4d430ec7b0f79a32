//! Load-time error type.
//!
//! Every asset failure (map, tileset or texture) surfaces as an
//! [`AssetError`]. None of them are recoverable: the driver logs the error and
//! exits.

use std::path::PathBuf;

use thiserror::Error;

/// Possible errors produced while loading level assets.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AssetError {
    /// A file could not be read.
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A file was read but is not valid JSON for the expected shape.
    #[error("could not parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A tileset file has neither an `image` nor a `tiles` list.
    #[error("tileset {} has neither an image nor a tile list", .0.display())]
    EmptyTileset(PathBuf),
    /// A texture could not be uploaded by the render backend.
    #[error("could not load texture {path}: {reason}")]
    Texture { path: String, reason: String },
}
