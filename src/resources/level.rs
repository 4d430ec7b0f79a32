//! Loaded level data.
//!
//! [`Level`] bundles a parsed [`TileMap`] with its resolved tilesets. It is
//! loaded once before the game loop starts (any failure is fatal) and the
//! Game scene spawns its entities from it on first entry.
//! [`WorldBounds`] is the map's pixel size, inserted when the level is
//! spawned and read by the camera.

use std::path::{Path, PathBuf};

use bevy_ecs::prelude::Resource;
use log::info;

use crate::error::AssetError;
use crate::resources::tilemap::TileMap;
use crate::resources::tileset::{TileRegion, Tileset, tileset_for};

#[derive(Resource, Debug, Clone)]
pub struct Level {
    pub path: PathBuf,
    pub tilemap: TileMap,
    pub tilesets: Vec<Tileset>,
}

impl Level {
    /// Load a map file and every tileset it references.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let tilemap = TileMap::load(path)?;
        let tilesets = tilemap
            .tilesets
            .iter()
            .map(|reference| Tileset::load(path, reference, tilemap.tilewidth))
            .collect::<Result<Vec<_>, _>>()?;
        let images: usize = tilesets.iter().map(|t| t.images().len()).sum();
        info!(
            "Loaded map {}: {} layers, {} tilesets ({} images), {}x{} tiles",
            path.display(),
            tilemap.layers.len(),
            tilesets.len(),
            images,
            tilemap.width_in_tiles(),
            tilemap.height_in_tiles()
        );
        Ok(Self {
            path: path.to_path_buf(),
            tilemap,
            tilesets,
        })
    }

    /// Resolve a global tile id against all loaded tilesets.
    pub fn region(&self, gid: u32) -> Option<TileRegion> {
        tileset_for(&self.tilesets, gid)?.region(gid)
    }

    pub fn tile_size(&self) -> f32 {
        self.tilemap.tilewidth as f32
    }

    pub fn bounds(&self) -> WorldBounds {
        let (width, height) = self.tilemap.pixel_size();
        WorldBounds { width, height }
    }
}

/// Size of the playable map in pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}
