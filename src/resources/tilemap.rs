//! Tile map data as exported by the Tiled editor (JSON format).
//!
//! Only the subset the game uses is modelled: ordered layers holding flat
//! row-major arrays of global tile ids, the tile size, and the list of
//! external tileset references. Unknown fields are ignored; layers without a
//! `data` array (object groups) load as empty layers.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AssetError;

pub const DEFAULT_TILE_SIZE: u32 = 16;

fn default_tile_size() -> u32 {
    DEFAULT_TILE_SIZE
}

/// A named layer of tile ids. Id 0 means "no tile".
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TileLayer {
    #[serde(default)]
    pub name: String,
    /// Width in tiles.
    #[serde(default)]
    pub width: u32,
    /// Height in tiles.
    #[serde(default)]
    pub height: u32,
    /// Row-major global tile ids.
    #[serde(default)]
    pub data: Vec<u32>,
}

impl TileLayer {
    /// Grid cell (column, row) of the flat index `index`.
    pub fn cell(&self, index: usize) -> (u32, u32) {
        let width = self.width.max(1) as usize;
        ((index % width) as u32, (index / width) as u32)
    }

    /// Non-empty tiles as `(column, row, gid)`, in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, gid)| **gid != 0)
            .map(|(index, gid)| {
                let (col, row) = self.cell(index);
                (col, row, *gid)
            })
    }
}

/// Reference from a map to an external tileset file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TilesetRef {
    /// Tileset file path, relative to the map file.
    pub source: String,
    /// First global id covered by this tileset.
    pub firstgid: u32,
}

/// Parsed static level geometry. Immutable after load.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TileMap {
    /// Map width in tiles (0 when absent; the layers are used instead).
    #[serde(default)]
    pub width: u32,
    /// Map height in tiles (0 when absent; the layers are used instead).
    #[serde(default)]
    pub height: u32,
    #[serde(default = "default_tile_size")]
    pub tilewidth: u32,
    #[serde(default = "default_tile_size")]
    pub tileheight: u32,
    pub layers: Vec<TileLayer>,
    #[serde(default)]
    pub tilesets: Vec<TilesetRef>,
}

impl TileMap {
    /// Read and parse a map file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents).map_err(|source| AssetError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Width in tiles: the declared width, or the widest layer.
    pub fn width_in_tiles(&self) -> u32 {
        self.layers
            .iter()
            .map(|l| l.width)
            .fold(self.width, u32::max)
    }

    /// Height in tiles: the declared height, or the tallest layer.
    pub fn height_in_tiles(&self) -> u32 {
        self.layers
            .iter()
            .map(|l| l.height)
            .fold(self.height, u32::max)
    }

    /// Map size in pixels.
    pub fn pixel_size(&self) -> (f32, f32) {
        (
            (self.width_in_tiles() * self.tilewidth) as f32,
            (self.height_in_tiles() * self.tileheight) as f32,
        )
    }
}

/// Lexically normalize a path taken from a map or tileset file.
///
/// Windows separators are turned into `/`, `.` segments are dropped and `..`
/// segments pop the previous segment.
pub fn normalize_path(path: impl AsRef<Path>) -> PathBuf {
    let unified = path.as_ref().to_string_lossy().replace('\\', "/");
    let mut out = PathBuf::new();
    for component in Path::new(&unified).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Resolve `relative` against the directory containing `base_file`.
pub fn resolve_relative(base_file: &Path, relative: &str) -> PathBuf {
    let dir = base_file.parent().unwrap_or_else(|| Path::new(""));
    normalize_path(dir.join(relative.replace('\\', "/")))
}
